//! Route definitions for persons.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/persons`.
///
/// The capitalized `Search` segment is part of the wire contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(person::list)
                .post(person::create)
                .put(person::update)
                .delete(person::remove),
        )
        .route("/{id}", get(person::get_by_id))
        .route("/Search/{search_text}", get(person::search))
}
