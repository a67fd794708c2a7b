use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::instrument;

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::parse_id,
    response,
    state::AppState,
};

#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<Response> {
    let blog_id = parse_id(&blog_id, "Blog")?;
    state.read_later.add(user_id, blog_id).await?;
    Ok(response::message(
        StatusCode::CREATED,
        "Added to read later successfully",
    ))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<Response> {
    let blog_id = parse_id(&blog_id, "Blog")?;
    state.read_later.remove(user_id, blog_id).await?;
    Ok(response::no_content())
}

#[instrument(skip(state))]
pub async fn get(State(state): State<AppState>, AuthUser(user_id): AuthUser) -> ApiResult<Response> {
    let blogs = state.read_later.get(user_id).await?;
    Ok(response::ok("Fetched read later list successfully", blogs))
}
