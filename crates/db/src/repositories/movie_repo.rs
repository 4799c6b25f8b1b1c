//! Repository for the `movies` table and its `movie_actors` association.

use std::collections::{HashMap, HashSet};

use sqlx::{FromRow, PgPool};

use cinelog_core::pagination::{clamp_page_size, page_offset};
use cinelog_core::types::{DbId, Timestamp};

use crate::models::movie::{Movie, MovieFields, MovieWithActors};
use crate::models::person::Person;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, language, release_date, cover_image, created_date, modified_date";

/// Row shape for loading a page's worth of associations in one query.
#[derive(Debug, FromRow)]
struct ActorRow {
    movie_id: DbId,
    person_id: DbId,
    name: String,
    date_of_birth: Timestamp,
}

/// Provides CRUD operations for movies, including actor-set maintenance.
pub struct MovieRepo;

impl MovieRepo {
    /// Total number of movie rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// One page of movies with their actors, ordered by id.
    ///
    /// Two queries: one for the page of movie rows, one for all association
    /// rows of that page, grouped in memory.
    pub async fn list(
        pool: &PgPool,
        page_index: i64,
        page_size: i64,
    ) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1 OFFSET $2");
        let movies: Vec<Movie> = sqlx::query_as(&query)
            .bind(clamp_page_size(page_size))
            .bind(page_offset(page_index, page_size))
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let mut actors_by_movie = Self::actors_for(pool, &ids).await?;

        Ok(movies
            .into_iter()
            .map(|movie| {
                let actors = actors_by_movie.remove(&movie.id).unwrap_or_default();
                MovieWithActors { movie, actors }
            })
            .collect())
    }

    /// Find a movie by id, with its actors loaded.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithActors>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let movie: Option<Movie> = sqlx::query_as(&query).bind(id).fetch_optional(pool).await?;
        let Some(movie) = movie else {
            return Ok(None);
        };

        let mut actors_by_movie = Self::actors_for(pool, &[movie.id]).await?;
        let actors = actors_by_movie.remove(&movie.id).unwrap_or_default();
        Ok(Some(MovieWithActors { movie, actors }))
    }

    /// Resolve a list of actor ids against `persons`, ordered by id.
    ///
    /// Unknown ids are silently absent from the result; the caller compares
    /// lengths to reject the request before any write happens.
    pub async fn resolve_actors(
        pool: &PgPool,
        actor_ids: &[DbId],
    ) -> Result<Vec<Person>, sqlx::Error> {
        if actor_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Person>(
            "SELECT id, name, date_of_birth FROM persons WHERE id = ANY($1) ORDER BY id",
        )
        .bind(actor_ids)
        .fetch_all(pool)
        .await
    }

    /// Insert a new movie with its actor set, in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &MovieFields,
        actors: &[Person],
    ) -> Result<MovieWithActors, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (title, description, language, release_date, cover_image) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let movie: Movie = sqlx::query_as(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.language)
            .bind(input.release_date)
            .bind(&input.cover_image)
            .fetch_one(&mut *tx)
            .await?;

        let actor_ids: Vec<DbId> = actors.iter().map(|p| p.id).collect();
        if !actor_ids.is_empty() {
            sqlx::query(
                "INSERT INTO movie_actors (movie_id, person_id) \
                 SELECT $1, unnest($2::bigint[])",
            )
            .bind(movie.id)
            .bind(&actor_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(MovieWithActors {
            movie,
            actors: actors.to_vec(),
        })
    }

    /// Overwrite a movie's scalar fields and reconcile its actor set.
    ///
    /// The actor set is reconciled by two set differences (current minus
    /// desired is deleted, desired minus current is inserted) so association
    /// rows for unchanged actors are never touched. Runs in one transaction;
    /// returns `None` without writing anything if the movie does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &MovieFields,
        actors: &[Person],
    ) -> Result<Option<MovieWithActors>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET \
                title = $2, \
                description = $3, \
                language = $4, \
                release_date = $5, \
                cover_image = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let movie: Option<Movie> = sqlx::query_as(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.language)
            .bind(input.release_date)
            .bind(&input.cover_image)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(movie) = movie else {
            // Dropping the transaction rolls back.
            return Ok(None);
        };

        let current: Vec<DbId> =
            sqlx::query_scalar("SELECT person_id FROM movie_actors WHERE movie_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;
        let desired: Vec<DbId> = actors.iter().map(|p| p.id).collect();
        let (added, removed) = diff_actor_sets(&current, &desired);

        if !removed.is_empty() {
            sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1 AND person_id = ANY($2)")
                .bind(id)
                .bind(&removed)
                .execute(&mut *tx)
                .await?;
        }
        if !added.is_empty() {
            sqlx::query(
                "INSERT INTO movie_actors (movie_id, person_id) \
                 SELECT $1, unnest($2::bigint[])",
            )
            .bind(id)
            .bind(&added)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(MovieWithActors {
            movie,
            actors: actors.to_vec(),
        }))
    }

    /// Delete a movie. Association rows cascade away.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Ids of the persons currently associated with a movie.
    pub async fn actor_ids(pool: &PgPool, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT person_id FROM movie_actors WHERE movie_id = $1 ORDER BY person_id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Load actors for a set of movies, grouped by movie id.
    async fn actors_for(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Person>>, sqlx::Error> {
        if movie_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<ActorRow> = sqlx::query_as(
            "SELECT ma.movie_id AS movie_id, p.id AS person_id, p.name, p.date_of_birth \
             FROM movie_actors ma \
             JOIN persons p ON p.id = ma.person_id \
             WHERE ma.movie_id = ANY($1) \
             ORDER BY ma.movie_id, p.id",
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await?;

        let mut grouped: HashMap<DbId, Vec<Person>> = HashMap::new();
        for row in rows {
            grouped.entry(row.movie_id).or_default().push(Person {
                id: row.person_id,
                name: row.name,
                date_of_birth: row.date_of_birth,
            });
        }
        Ok(grouped)
    }
}

/// Compute the additions and removals needed to turn `current` into `desired`.
///
/// Returned as `(added, removed)`, each in the order ids appear in their
/// source list. Ids in both sets appear in neither, so their association
/// rows stay untouched.
pub fn diff_actor_sets(current: &[DbId], desired: &[DbId]) -> (Vec<DbId>, Vec<DbId>) {
    let current_set: HashSet<DbId> = current.iter().copied().collect();
    let desired_set: HashSet<DbId> = desired.iter().copied().collect();

    let added = desired
        .iter()
        .copied()
        .filter(|id| !current_set.contains(id))
        .collect();
    let removed = current
        .iter()
        .copied()
        .filter(|id| !desired_set.contains(id))
        .collect();
    (added, removed)
}
