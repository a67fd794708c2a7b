use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument};

use super::dto::BookmarkRequest;
use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult, ServiceError},
    extract::{parse_id, ValidatedJson},
    response::{self, Created},
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<BookmarkRequest>,
) -> ApiResult<Response> {
    let id = state
        .bookmarks
        .add(user_id, &payload.name, payload.visible)
        .await?;
    info!(bookmark_id = %id, "bookmark added");
    Ok(response::created("Added bookmark successfully", Created { id }))
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Response> {
    let bookmarks = state.bookmarks.get_all(user_id).await.map_err(|e| match e {
        ServiceError::BookmarkNotFound => ApiError::not_found("You have no bookmarks"),
        e => e.into(),
    })?;
    Ok(response::ok("Fetched all bookmarks successfully", bookmarks))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    let bookmark = state.bookmarks.get(bookmark_id, user_id).await?;
    Ok(response::ok("Fetched bookmark successfully", bookmark))
}

#[instrument(skip(state))]
pub async fn get_blogs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    let blogs = state
        .bookmarks
        .get_blogs(bookmark_id, user_id)
        .await
        .map_err(|e| match e {
            ServiceError::BlogNotFound => ApiError::not_found("You have no blogs"),
            e => e.into(),
        })?;
    Ok(response::ok("Fetched all blogs from bookmark successfully", blogs))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(bookmark_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<BookmarkRequest>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    state
        .bookmarks
        .update(bookmark_id, user_id, &payload.name, payload.visible)
        .await?;
    Ok(response::message(StatusCode::OK, "Bookmark updated successfully"))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    state.bookmarks.remove(bookmark_id, user_id).await?;
    info!(%bookmark_id, "bookmark removed");
    Ok(response::no_content())
}

#[instrument(skip(state))]
pub async fn add_blog(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((bookmark_id, blog_id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    let blog_id = parse_id(&blog_id, "Blog")?;
    state
        .bookmarks
        .add_blog(bookmark_id, blog_id, user_id)
        .await?;
    Ok(response::message(
        StatusCode::CREATED,
        "Added blog into bookmark successfully",
    ))
}

#[instrument(skip(state))]
pub async fn remove_blog(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((bookmark_id, blog_id)): Path<(String, String)>,
) -> ApiResult<Response> {
    let bookmark_id = parse_id(&bookmark_id, "Bookmark")?;
    let blog_id = parse_id(&blog_id, "Blog")?;
    state
        .bookmarks
        .remove_blog(bookmark_id, blog_id, user_id)
        .await
        .map_err(|e| match e {
            ServiceError::BlogNotFound => ApiError::not_found("Either bookmark or blog not found"),
            e => e.into(),
        })?;
    Ok(response::no_content())
}
