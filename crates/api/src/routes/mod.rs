pub mod health;
pub mod movie;
pub mod person;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies                  list, create, update, delete(?id=)
/// /movies/{id}             get
/// /persons                 list, create, update, delete(?id=)
/// /persons/{id}            get
/// /persons/Search/{text}   search by name substring
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/persons", person::router())
}
