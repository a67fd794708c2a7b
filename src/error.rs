use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ApiResponse;

/// Domain conditions reported by the data access services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("username already in use")]
    UsernameInUse,
    #[error("email already in use")]
    EmailInUse,
    #[error("user not found")]
    UserNotFound,

    #[error("blog not found")]
    BlogNotFound,

    #[error("tag not found")]
    TagNotFound,
    #[error("tag already in use")]
    TagInUse,

    #[error("draft not found")]
    DraftNotFound,

    #[error("history not found")]
    HistoryNotFound,

    #[error("blog already in read later")]
    AlreadyInReadLater,
    #[error("read later list is empty")]
    ReadLaterEmpty,

    #[error("bookmark name in use")]
    BookmarkNameInUse,
    #[error("blog already in bookmark")]
    BlogAlreadyInBookmark,
    #[error("bookmark not found")]
    BookmarkNotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors rendered to clients inside the response envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(detail) => {
                // detail stays server-side
                tracing::error!(error = %detail, "internal error");
                "Internal Server Error".to_string()
            }
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => msg,
        };
        (status, Json(ApiResponse::message(message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UsernameInUse => ApiError::conflict("Username is already in use"),
            ServiceError::EmailInUse => ApiError::conflict("Email is already in use"),
            ServiceError::UserNotFound => ApiError::not_found("User not found"),
            ServiceError::BlogNotFound => ApiError::not_found("Blog not found"),
            ServiceError::TagNotFound => ApiError::not_found("Tag not found"),
            ServiceError::TagInUse => ApiError::conflict("Tag already exists"),
            ServiceError::DraftNotFound => ApiError::not_found("Draft not found"),
            ServiceError::HistoryNotFound => ApiError::not_found("History not found"),
            ServiceError::AlreadyInReadLater => ApiError::conflict("Blog already in read later"),
            ServiceError::ReadLaterEmpty => ApiError::not_found("Your read later list is empty"),
            ServiceError::BookmarkNameInUse => {
                ApiError::conflict("Bookmark with this name already exists")
            }
            ServiceError::BlogAlreadyInBookmark => {
                ApiError::conflict("Blog is already in this bookmark")
            }
            ServiceError::BookmarkNotFound => ApiError::not_found("Bookmark not found"),
            ServiceError::Database(e) => ApiError::internal(e),
            ServiceError::Task(e) => ApiError::internal(e),
        }
    }
}
