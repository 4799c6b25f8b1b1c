//! Handlers for the `/persons` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use cinelog_core::pagination::DEFAULT_PAGE_SIZE;
use cinelog_core::types::DbId;
use cinelog_db::models::person::{CreatePerson, UpdatePerson};
use cinelog_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::query::{IdParams, PageParams};
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views::{ActorDetailView, ActorPayload, ActorView, PersonListData, PersonSearchView};

/// GET /api/persons?pageIndex=&pageSize=
///
/// One page of actor summaries plus the unfiltered total count.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<PersonListData>>> {
    let count = PersonRepo::count(&state.pool).await?;
    let persons = PersonRepo::list(
        &state.pool,
        params.page_index.unwrap_or(0),
        params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    )
    .await?;

    let person = persons.into_iter().map(ActorView::from).collect();
    Ok(Json(ApiResponse::success(
        "Success",
        PersonListData { person, count },
    )))
}

/// GET /api/persons/{id}
///
/// Detail view including the titles of every movie whose actor set contains
/// this person, computed by a reverse join.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ActorDetailView>>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Record Not Exist."))?;
    let movies = PersonRepo::movie_titles(&state.pool, person.id).await?;

    Ok(Json(ApiResponse::success(
        "Success",
        ActorDetailView {
            id: person.id,
            name: person.name,
            date_of_birth: person.date_of_birth,
            movies,
        },
    )))
}

/// GET /api/persons/Search/{searchText}
///
/// Substring match on name. An empty result is a failure envelope but still
/// HTTP 200, unlike every other endpoint; that asymmetry is part of the
/// wire contract.
pub async fn search(
    State(state): State<AppState>,
    Path(search_text): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<PersonSearchView>>>> {
    let matches = PersonRepo::search_by_name(&state.pool, &search_text).await?;
    if matches.is_empty() {
        return Ok(Json(ApiResponse::failure("No Records Found")));
    }

    let matches = matches.into_iter().map(PersonSearchView::from).collect();
    Ok(Json(ApiResponse::success("Success", matches)))
}

/// POST /api/persons
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ActorPayload>,
) -> AppResult<Json<ApiResponse<ActorView>>> {
    payload.validate()?;

    let person = PersonRepo::create(
        &state.pool,
        &CreatePerson {
            name: payload.name,
            date_of_birth: payload.date_of_birth,
        },
    )
    .await?;

    Ok(Json(ApiResponse::success(
        "Created Successfully.",
        ActorView::from(person),
    )))
}

/// PUT /api/persons
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<ActorPayload>,
) -> AppResult<Json<ApiResponse<ActorView>>> {
    payload.validate()?;

    if payload.id <= 0 {
        return Err(AppError::NotFound("Invalid person record"));
    }

    let person = PersonRepo::update(
        &state.pool,
        payload.id,
        &UpdatePerson {
            name: payload.name,
            date_of_birth: payload.date_of_birth,
        },
    )
    .await?
    .ok_or(AppError::NotFound("Invalid person record"))?;

    Ok(Json(ApiResponse::success(
        "Updated Successfully.",
        ActorView::from(person),
    )))
}

/// DELETE /api/persons?id=
///
/// Unconditional: no check for referencing movies. Association rows are
/// removed by the FK cascade.
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = PersonRepo::delete(&state.pool, params.id).await?;
    if !deleted {
        return Err(AppError::NotFound("Invalid Person Record"));
    }
    Ok(Json(ApiResponse::ok("Deleted Successfully")))
}
