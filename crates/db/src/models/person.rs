//! Person entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cinelog_core::types::{DbId, Timestamp};

/// A row from the `persons` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub date_of_birth: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub date_of_birth: Timestamp,
}

/// DTO for updating an existing person. Both fields are overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub name: String,
    pub date_of_birth: Timestamp,
}
