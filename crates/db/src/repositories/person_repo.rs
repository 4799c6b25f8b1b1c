//! Repository for the `persons` table.

use sqlx::PgPool;

use cinelog_core::pagination::{clamp_page_size, page_offset};
use cinelog_core::types::DbId;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date_of_birth";

/// Provides CRUD operations for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Total number of person rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(pool)
            .await
    }

    /// One page of persons, ordered by id.
    pub async fn list(
        pool: &PgPool,
        page_index: i64,
        page_size: i64,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Person>(&query)
            .bind(clamp_page_size(page_size))
            .bind(page_offset(page_index, page_size))
            .fetch_all(pool)
            .await
    }

    /// Find a person by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-sensitive substring match on name, ordered by id.
    pub async fn search_by_name(
        pool: &PgPool,
        search_text: &str,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM persons WHERE name LIKE $1 ORDER BY id");
        let pattern = format!("%{}%", escape_like(search_text));
        sqlx::query_as::<_, Person>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Titles of every movie whose actor set contains this person.
    pub async fn movie_titles(pool: &PgPool, person_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT m.title FROM movies m \
             JOIN movie_actors ma ON ma.movie_id = m.id \
             WHERE ma.person_id = $1 \
             ORDER BY m.id",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (name, date_of_birth) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .fetch_one(pool)
            .await
    }

    /// Overwrite name and date of birth with an explicit UPDATE.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET name = $2, date_of_birth = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person unconditionally. Association rows cascade away;
    /// movies referencing this person are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
