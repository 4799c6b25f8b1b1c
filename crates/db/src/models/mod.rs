//! Row models and create/update DTOs, one module per table.

pub mod movie;
pub mod person;
