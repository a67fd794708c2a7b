use axum::{
    extract::{FromRef, State},
    response::Response,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{LoginRequest, RegisterRequest, UserLoginResponse},
    repo_types::NewUser,
};
use crate::{
    auth::{
        password::{hash_password_blocking, verify_password_blocking},
        AuthUser, JwtKeys,
    },
    error::{ApiError, ApiResult, ServiceError},
    extract::ValidatedJson,
    response,
    state::AppState,
};

#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> ApiResult<Response> {
    let password_hash = hash_password_blocking(payload.password)
        .await
        .map_err(ApiError::internal)?;

    let user = NewUser {
        id: Uuid::new_v4(),
        username: payload.username,
        email: payload.email,
        password_hash,
        bio: payload.bio,
        avatar: payload.avatar,
        joined_at: OffsetDateTime::now_utc(),
    };
    state.users.register(&user).await.map_err(|e| {
        warn!(error = %e, "failed to register user");
        ApiError::from(e)
    })?;

    let access_token = JwtKeys::from_ref(&state)
        .sign(user.id)
        .map_err(ApiError::internal)?;

    info!(user_id = %user.id, "user registered");
    Ok(response::created(
        "User registered successfully",
        UserLoginResponse { access_token },
    ))
}

#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> ApiResult<Response> {
    let (user_id, password_hash) = state
        .users
        .get_id_password_by_username(&payload.username)
        .await
        .map_err(|e| match e {
            ServiceError::UserNotFound => {
                warn!("login for unknown username");
                ApiError::not_found("User with this username does not exist")
            }
            e => e.into(),
        })?;

    let ok = verify_password_blocking(payload.password, password_hash)
        .await
        .map_err(ApiError::internal)?;
    if !ok {
        warn!(user_id = %user_id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials provided".into()));
    }

    if let Err(e) = state.users.touch_last_login(user_id).await {
        warn!(error = %e, user_id = %user_id, "failed to update last login");
    }

    let access_token = JwtKeys::from_ref(&state)
        .sign(user_id)
        .map_err(ApiError::internal)?;

    info!(user_id = %user_id, "user logged in");
    Ok(response::ok(
        "User login successfully",
        UserLoginResponse { access_token },
    ))
}

#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>, AuthUser(user_id): AuthUser) -> ApiResult<Response> {
    let profile = state.users.get_profile(user_id).await?;
    Ok(response::ok("Fetched user profile successfully", profile))
}
