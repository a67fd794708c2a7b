use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument};

use super::dto::DraftRequest;
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
    AuthUser(author_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<DraftRequest>,
) -> ApiResult<Response> {
    let id = state.drafts.add(author_id, &payload.into()).await?;
    info!(draft_id = %id, "draft saved");
    Ok(response::created("Draft saved successfully", Created { id }))
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
) -> ApiResult<Response> {
    let drafts = state.drafts.get_all(author_id).await.map_err(|e| match e {
        ServiceError::DraftNotFound => ApiError::not_found("You have no drafts"),
        e => e.into(),
    })?;
    Ok(response::ok("Fetched drafts successfully", drafts))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
    Path(draft_id): Path<String>,
) -> ApiResult<Response> {
    let draft_id = parse_id(&draft_id, "Draft")?;
    let draft = state.drafts.get(draft_id, author_id).await?;
    Ok(response::ok("Fetched draft successfully", draft))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
    Path(draft_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<DraftRequest>,
) -> ApiResult<Response> {
    let draft_id = parse_id(&draft_id, "Draft")?;
    state
        .drafts
        .update(draft_id, author_id, &payload.into())
        .await?;
    Ok(response::message(StatusCode::OK, "Draft updated successfully"))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
    Path(draft_id): Path<String>,
) -> ApiResult<Response> {
    let draft_id = parse_id(&draft_id, "Draft")?;
    state.drafts.remove(draft_id, author_id).await?;
    info!(%draft_id, "draft removed");
    Ok(response::no_content())
}
