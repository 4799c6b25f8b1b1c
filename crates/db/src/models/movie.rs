//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cinelog_core::types::{DbId, Timestamp};

use crate::models::person::Person;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub release_date: Timestamp,
    pub cover_image: Option<String>,
    pub created_date: Timestamp,
    /// In the schema but not written by any operation yet.
    pub modified_date: Option<Timestamp>,
}

/// A movie together with its associated actors.
#[derive(Debug, Clone)]
pub struct MovieWithActors {
    pub movie: Movie,
    pub actors: Vec<Person>,
}

/// Scalar fields for creating or overwriting a movie row.
///
/// The actor set is handled separately: callers resolve actor ids against
/// `persons` first and pass the resolved rows to the repository, so an
/// unknown id fails before anything is written.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieFields {
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub release_date: Timestamp,
    pub cover_image: Option<String>,
}
