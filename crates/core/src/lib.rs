//! Shared domain types and helpers for the cinelog workspace.
//!
//! This crate has zero internal dependencies so both the repository layer
//! (`cinelog-db`) and the HTTP layer (`cinelog-api`) can use it.

pub mod pagination;
pub mod types;
