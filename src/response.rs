use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Envelope shared by every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Payload for create endpoints.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: uuid::Uuid,
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

pub fn ok<T: Serialize>(message: &str, data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::with_data(message, data))).into_response()
}

pub fn created<T: Serialize>(message: &str, data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::with_data(message, data))).into_response()
}

/// Envelope with no `data`.
pub fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::message(message))).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_missing_data() {
        let json = serde_json::to_value(ApiResponse::message("Server Health OK")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Server Health OK" }));
    }

    #[test]
    fn includes_data_when_present() {
        let id = uuid::Uuid::new_v4();
        let json = serde_json::to_value(ApiResponse::with_data("Tag added", Created { id })).unwrap();
        assert_eq!(json["message"], "Tag added");
        assert_eq!(json["data"]["id"], id.to_string());
    }
}
