mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use bloggy::app::build_app;

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.expect("router responds");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &Router, username: &str) -> String {
    let (status, json) = send(
        app,
        Method::POST,
        "/v1/users/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "Secret123!",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json["data"]["access_token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrator = "bloggy::db::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn register_then_duplicate_username(pool: PgPool) {
    let app = build_app(common::state(pool));

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/users/register",
        None,
        Some(json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "Secret123!",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "User registered successfully");
    assert!(json["data"]["access_token"].is_string());

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/users/register",
        None,
        Some(json!({
            "username": "ada",
            "email": "someone@example.com",
            "password": "Secret123!",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Username is already in use");
}

#[sqlx::test(migrator = "bloggy::db::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn login_outcomes(pool: PgPool) {
    let app = build_app(common::state(pool));
    register(&app, "ada").await;

    let login = |username: &str, password: &str| {
        json!({ "username": username, "password": password })
    };

    let (status, json) = send(&app, Method::POST, "/v1/users/login", None, Some(login("ada", "Secret123!"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "User login successfully");
    let token = json["data"]["access_token"].as_str().unwrap().to_string();

    let (status, json) = send(&app, Method::POST, "/v1/users/login", None, Some(login("ada", "Wrong123!"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid credentials provided");

    let (status, json) = send(&app, Method::POST, "/v1/users/login", None, Some(login("nobody", "Secret123!"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User with this username does not exist");

    let (status, json) = send(&app, Method::GET, "/v1/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "ada");
}

#[sqlx::test(migrator = "bloggy::db::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn publish_read_and_history(pool: PgPool) {
    let app = build_app(common::state(pool));
    let author = register(&app, "ada").await;
    let reader = register(&app, "grace").await;

    let (status, json) = send(&app, Method::POST, "/v1/tags", Some(&author), Some(json!({ "name": "rust" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let tag_id = json["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/blogs",
        Some(&author),
        Some(json!({
            "title": "Ownership",
            "subtitle": "Moves and borrows",
            "content": "...",
            "tags": [tag_id],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    let blog_id = json["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, Method::GET, &format!("/v1/blogs/{}", blog_id), Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Ownership");
    assert_eq!(json["data"]["author"], "ada");
    assert_eq!(json["data"]["tags"][0]["name"], "rust");

    let (status, json) = send(&app, Method::GET, "/v1/history", Some(&reader), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["id"], blog_id.as_str());

    let (status, _) = send(&app, Method::DELETE, "/v1/history", Some(&reader), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, Method::GET, "/v1/history", Some(&reader), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "You have no history");
}

#[sqlx::test(migrator = "bloggy::db::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn missing_draft_delete_is_not_found(pool: PgPool) {
    let app = build_app(common::state(pool));
    let token = register(&app, "ada").await;

    let uri = format!("/v1/drafts/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(&app, Method::GET, "/v1/drafts", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "You have no drafts");
}

#[sqlx::test(migrator = "bloggy::db::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn publish_with_unknown_tag_is_not_found(pool: PgPool) {
    let app = build_app(common::state(pool.clone()));
    let token = register(&app, "ada").await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/v1/blogs",
        Some(&token),
        Some(json!({
            "title": "Orphan tags",
            "subtitle": "Nothing to link",
            "content": "...",
            "tags": [uuid::Uuid::new_v4().to_string()],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Tag not found");

    let blogs: i64 = sqlx::query_scalar("SELECT count(*) FROM blogs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(blogs, 0);
}
