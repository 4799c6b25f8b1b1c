//! HTTP-level integration tests for the /api/movies endpoints.
//!
//! Every response is the `{ status, message, data }` envelope; success is
//! HTTP 200 and every failure is HTTP 400 with `status: false`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_person(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/persons",
        serde_json::json!({"name": name, "dateOfBirth": "1974-11-11T00:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

fn inception(actor_ids: &[i64]) -> serde_json::Value {
    serde_json::json!({
        "title": "Inception",
        "language": "English",
        "releaseDate": "2010-07-16T00:00:00Z",
        "actors": actor_ids,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_movie_with_actors(pool: PgPool) {
    let a = seed_person(&pool, "Leonardo DiCaprio").await;
    let b = seed_person(&pool, "Elliot Page").await;

    let response = post_json(build_test_app(pool), "/api/movies", inception(&[a, b])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    assert_eq!(json["message"], "Created Successfully.");
    assert!(json["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(json["data"]["actors"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["releaseDate"], "2010-07-16T00:00:00Z");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_movie_with_unknown_actor_writes_nothing(pool: PgPool) {
    let a = seed_person(&pool, "Real Person").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/movies",
        inception(&[a, 999_999]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message"], "Invalid Actor assigned.");

    // No row was inserted.
    let list = body_json(get(build_test_app(pool), "/api/movies").await).await;
    assert_eq!(list["data"]["count"], 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_movie_without_title_fails_validation(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/movies",
        serde_json::json!({
            "title": "",
            "language": "English",
            "releaseDate": "2010-07-16T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message"], "Validation Failed.");
    assert!(json["data"]["title"].is_array());
}

// ---------------------------------------------------------------------------
// Get / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_movie_by_id_includes_description(pool: PgPool) {
    let mut body = inception(&[]);
    body["description"] = serde_json::json!("A thief enters dreams.");
    let created = body_json(post_json(build_test_app(pool.clone()), "/api/movies", body).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(build_test_app(pool), &format!("/api/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Success");
    assert_eq!(json["data"]["description"], "A thief enters dreams.");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_missing_movie_is_a_failure_envelope(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/movies/999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], false);
    assert_eq!(json["message"], "Record Not Exist.");
    assert_eq!(json["data"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_movies_pages_and_counts(pool: PgPool) {
    for i in 0..3 {
        let mut body = inception(&[]);
        body["title"] = serde_json::json!(format!("Movie {i}"));
        post_json(build_test_app(pool.clone()), "/api/movies", body).await;
    }

    let json = body_json(
        get(
            build_test_app(pool.clone()),
            "/api/movies?pageIndex=0&pageSize=2",
        )
        .await,
    )
    .await;
    assert_eq!(json["status"], true);
    assert_eq!(json["data"]["count"], 3);
    assert_eq!(json["data"]["movies"].as_array().unwrap().len(), 2);
    // List rows carry no description field.
    assert!(json["data"]["movies"][0].get("description").is_none());

    let page1 = body_json(
        get(build_test_app(pool), "/api/movies?pageIndex=1&pageSize=2").await,
    )
    .await;
    assert_eq!(page1["data"]["movies"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_reconciles_actors_and_overwrites_fields(pool: PgPool) {
    let a = seed_person(&pool, "Keeps Role").await;
    let b = seed_person(&pool, "Gets Cut").await;
    let c = seed_person(&pool, "Joins Cast").await;

    let created = body_json(
        post_json(build_test_app(pool.clone()), "/api/movies", inception(&[a, b])).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        "/api/movies",
        serde_json::json!({
            "id": id,
            "title": "Inception (Director's Cut)",
            "language": "English",
            "releaseDate": "2010-07-16T00:00:00Z",
            "actors": [a, c],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Updated Successfully.");
    assert_eq!(json["data"]["title"], "Inception (Director's Cut)");

    let fetched = body_json(get(build_test_app(pool), &format!("/api/movies/{id}")).await).await;
    let mut ids: Vec<i64> = fetched["data"]["actors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|actor| actor["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    let mut expected = vec![a, c];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_rejects_non_positive_id(pool: PgPool) {
    let response = put_json(build_test_app(pool), "/api/movies", inception(&[])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid Movie Record.");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_missing_movie_is_a_failure_envelope(pool: PgPool) {
    let mut body = inception(&[]);
    body["id"] = serde_json::json!(424242);
    let response = put_json(build_test_app(pool), "/api/movies", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid Movie Record.");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_movie_by_query_param(pool: PgPool) {
    let created =
        body_json(post_json(build_test_app(pool.clone()), "/api/movies", inception(&[])).await)
            .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/api/movies?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], true);
    assert_eq!(json["message"], "Deleted Successfully");
    assert_eq!(json["data"], serde_json::Value::Null);

    let fetched = get(build_test_app(pool), &format!("/api/movies/{id}")).await;
    assert_eq!(fetched.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_missing_movie_leaves_count_unchanged(pool: PgPool) {
    post_json(build_test_app(pool.clone()), "/api/movies", inception(&[])).await;

    let response = delete(build_test_app(pool.clone()), "/api/movies?id=999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid Movie Record");

    let list = body_json(get(build_test_app(pool), "/api/movies").await).await;
    assert_eq!(list["data"]["count"], 1);
}
