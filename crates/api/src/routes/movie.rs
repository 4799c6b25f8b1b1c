//! Route definitions for movies.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// Update and delete address the collection root: PUT carries the id in
/// the body, DELETE in the query string. Part of the wire contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movie::list)
                .post(movie::create)
                .put(movie::update)
                .delete(movie::remove),
        )
        .route("/{id}", get(movie::get_by_id))
}
