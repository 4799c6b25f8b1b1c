//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use cinelog_core::pagination::DEFAULT_PAGE_SIZE;
use cinelog_core::types::DbId;
use cinelog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::{IdParams, PageParams};
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views::{MovieDetailView, MovieListData, MovieListView, MoviePayload};

/// GET /api/movies?pageIndex=&pageSize=
///
/// One page of movie summaries plus the unfiltered total count.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<MovieListData>>> {
    let count = MovieRepo::count(&state.pool).await?;
    let movies = MovieRepo::list(
        &state.pool,
        params.page_index.unwrap_or(0),
        params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    )
    .await?;

    let movies = movies.into_iter().map(MovieListView::from).collect();
    Ok(Json(ApiResponse::success(
        "Success",
        MovieListData { movies, count },
    )))
}

/// GET /api/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<MovieDetailView>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Record Not Exist."))?;

    Ok(Json(ApiResponse::success(
        "Success",
        MovieDetailView::from(movie),
    )))
}

/// POST /api/movies
///
/// Validates required fields, resolves the actor id list against existing
/// persons (any miss fails before anything is written), then inserts the
/// movie and its actor set in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<Json<ApiResponse<MovieDetailView>>> {
    payload.validate()?;

    let actors = MovieRepo::resolve_actors(&state.pool, &payload.actors).await?;
    if actors.len() != payload.actors.len() {
        return Err(AppError::InvalidActor);
    }

    let movie = MovieRepo::create(&state.pool, &payload.fields(), &actors).await?;
    Ok(Json(ApiResponse::success(
        "Created Successfully.",
        MovieDetailView::from(movie),
    )))
}

/// PUT /api/movies
///
/// Overwrites all scalar fields and reconciles the actor set by set
/// difference, so association rows for unchanged actors are left alone.
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<Json<ApiResponse<MovieDetailView>>> {
    payload.validate()?;

    if payload.id <= 0 {
        return Err(AppError::NotFound("Invalid Movie Record."));
    }

    let actors = MovieRepo::resolve_actors(&state.pool, &payload.actors).await?;
    if actors.len() != payload.actors.len() {
        return Err(AppError::InvalidActor);
    }

    let movie = MovieRepo::update(&state.pool, payload.id, &payload.fields(), &actors)
        .await?
        .ok_or(AppError::NotFound("Invalid Movie Record."))?;

    Ok(Json(ApiResponse::success(
        "Updated Successfully.",
        MovieDetailView::from(movie),
    )))
}

/// DELETE /api/movies?id=
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = MovieRepo::delete(&state.pool, params.id).await?;
    if !deleted {
        return Err(AppError::NotFound("Invalid Movie Record"));
    }
    Ok(Json(ApiResponse::ok("Deleted Successfully")))
}
