//! View models: the wire-facing request/response shapes.
//!
//! These are deliberately decoupled from the row models in `cinelog_db`.
//! All fields serialize as camelCase to match the API's JSON contract.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cinelog_core::types::{DbId, Timestamp};
use cinelog_db::models::movie::{MovieFields, MovieWithActors};
use cinelog_db::models::person::Person;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body for POST and PUT /movies. PUT requires a positive `id`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    #[serde(default)]
    pub id: DbId,
    #[validate(length(min = 1, message = "Name of the movie is required."))]
    pub title: String,
    pub description: Option<String>,
    /// Ids of the persons to associate as actors.
    #[serde(default)]
    pub actors: Vec<DbId>,
    #[validate(length(min = 1, message = "Language of the movie is required."))]
    pub language: String,
    pub release_date: Timestamp,
    pub cover_image: Option<String>,
}

impl MoviePayload {
    /// The scalar fields, shaped for the repository layer.
    pub fn fields(&self) -> MovieFields {
        MovieFields {
            title: self.title.clone(),
            description: self.description.clone(),
            language: self.language.clone(),
            release_date: self.release_date,
            cover_image: self.cover_image.clone(),
        }
    }
}

/// Body for POST and PUT /persons. PUT requires a positive `id`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActorPayload {
    #[serde(default)]
    pub id: DbId,
    #[validate(length(min = 1, message = "Name of the person is required."))]
    pub name: String,
    pub date_of_birth: Timestamp,
}

// ---------------------------------------------------------------------------
// Response views
// ---------------------------------------------------------------------------

/// Person summary: list rows and the `actors` entries on movie views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorView {
    pub id: DbId,
    pub name: String,
    pub date_of_birth: Timestamp,
}

impl From<Person> for ActorView {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            date_of_birth: person.date_of_birth,
        }
    }
}

/// Person detail: adds the titles of every movie this person appears in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDetailView {
    pub id: DbId,
    pub name: String,
    pub date_of_birth: Timestamp,
    pub movies: Vec<String>,
}

/// Row shape for name search results: id and name only.
#[derive(Debug, Serialize)]
pub struct PersonSearchView {
    pub id: DbId,
    pub name: String,
}

impl From<Person> for PersonSearchView {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
        }
    }
}

/// Movie summary for list pages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListView {
    pub id: DbId,
    pub title: String,
    pub actors: Vec<ActorView>,
    pub language: String,
    pub release_date: Timestamp,
    pub cover_image: Option<String>,
}

impl From<MovieWithActors> for MovieListView {
    fn from(m: MovieWithActors) -> Self {
        Self {
            id: m.movie.id,
            title: m.movie.title,
            actors: m.actors.into_iter().map(ActorView::from).collect(),
            language: m.movie.language,
            release_date: m.movie.release_date,
            cover_image: m.movie.cover_image,
        }
    }
}

/// Movie detail: the summary plus description.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailView {
    pub id: DbId,
    pub title: String,
    pub actors: Vec<ActorView>,
    pub language: String,
    pub release_date: Timestamp,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

impl From<MovieWithActors> for MovieDetailView {
    fn from(m: MovieWithActors) -> Self {
        Self {
            id: m.movie.id,
            title: m.movie.title,
            actors: m.actors.into_iter().map(ActorView::from).collect(),
            language: m.movie.language,
            release_date: m.movie.release_date,
            cover_image: m.movie.cover_image,
            description: m.movie.description,
        }
    }
}

/// `data` payload for GET /movies: the page plus the unfiltered total.
#[derive(Debug, Serialize)]
pub struct MovieListData {
    pub movies: Vec<MovieListView>,
    pub count: i64,
}

/// `data` payload for GET /persons. The singular `person` key is part of
/// the wire contract.
#[derive(Debug, Serialize)]
pub struct PersonListData {
    pub person: Vec<ActorView>,
    pub count: i64,
}
