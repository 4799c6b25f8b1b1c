//! Request handlers, one submodule per resource.
//!
//! Handlers validate input, delegate to the repositories in `cinelog_db`,
//! project rows into view models, and wrap everything in the
//! `{ status, message, data }` envelope via [`crate::response::ApiResponse`]
//! and [`crate::error::AppError`].

pub mod movie;
pub mod person;
