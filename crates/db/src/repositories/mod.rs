//! Repositories: stateless structs with async CRUD functions over a `PgPool`.

pub mod movie_repo;
pub mod person_repo;

pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;
