use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::extract::{not_blank, optional_url, RequestBody};

lazy_static! {
    static ref SPECIAL_CHAR_RE: Regex =
        Regex::new(r#"[!@#$%^&*()_+\-=\[\]{}\\|;:'",<>.?/`~]"#).unwrap();
}

/// Presence and special-character rules; the minimum length is a separate rule.
fn password_rules(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("Password is required"));
        return Err(err);
    }
    if value.chars().count() >= 8 && !SPECIAL_CHAR_RE.is_match(value) {
        let mut err = ValidationError::new("password");
        err.message = Some(Cow::Borrowed(
            "Password must contain at least one special character",
        ));
        return Err(err);
    }
    Ok(())
}

/// Request body for user registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    #[validate(length(max = 30, message = "Username cannot be more than 30 characters long"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 70, message = "Email cannot be more than 70 characters long"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "password_rules"))]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Bio cannot be more than 500 characters"))]
    pub bio: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url", message = "Invalid avatar format"))]
    pub avatar: String,
}

impl RequestBody for RegisterRequest {
    const NAME: &'static str = "user registration";
    const FIELDS: &'static [&'static str] = &["username", "email", "password", "bio", "avatar"];
}

/// Request body for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    #[validate(length(max = 30, message = "Username cannot be more than 30 characters long"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "password_rules"))]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

impl RequestBody for LoginRequest {
    const NAME: &'static str = "user login";
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Returned by register and login.
#[derive(Debug, Serialize)]
pub struct UserLoginResponse {
    pub access_token: String,
}
