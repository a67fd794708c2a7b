use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult, ServiceError},
    extract::parse_id,
    response,
    state::AppState,
};

fn no_history(e: ServiceError) -> ApiError {
    match e {
        ServiceError::HistoryNotFound => ApiError::not_found("You have no history"),
        e => e.into(),
    }
}

#[instrument(skip(state))]
pub async fn get(State(state): State<AppState>, AuthUser(user_id): AuthUser) -> ApiResult<Response> {
    let history = state.history.get(user_id).await.map_err(no_history)?;
    Ok(response::ok("Fetched reading history", history))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<Response> {
    let blog_id = parse_id(&blog_id, "Blog")?;
    state.history.remove(user_id, blog_id).await?;
    Ok(response::no_content())
}

#[instrument(skip(state))]
pub async fn remove_all(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Response> {
    state.history.remove_all(user_id).await.map_err(no_history)?;
    info!(%user_id, "reading history cleared");
    Ok(response::no_content())
}
