use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::{info, instrument};

use super::dto::AddTagRequest;
use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::ValidatedJson,
    response::{self, Created},
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn add(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<AddTagRequest>,
) -> ApiResult<Response> {
    let id = state.tags.add(&payload.name).await?;
    info!(tag_id = %id, name = %payload.name, added_by = %user_id, "tag added");
    Ok(response::created("Tag added successfully", Created { id }))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Response> {
    let tag = state.tags.get(&identifier).await?;
    Ok(response::ok("Fetched tag successfully", tag))
}

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Response> {
    let tags = state.tags.list().await?;
    Ok(response::ok("Fetched tags successfully", tags))
}
