use std::borrow::Cow;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::ApiError;

/// Request bodies accepted through [`ValidatedJson`].
pub trait RequestBody: DeserializeOwned + Validate {
    /// Used in "Invalid <NAME> request".
    const NAME: &'static str;
    /// Field names in declaration order; the first failing one is reported.
    const FIELDS: &'static [&'static str];
}

/// JSON body that has been deserialized and validated.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestBody,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, request = T::NAME, "failed to parse request body");
            ApiError::bad_request(format!("Invalid {} request", T::NAME))
        })?;
        value.validate().map_err(|errors| {
            warn!(error = %errors, request = T::NAME, "request validation failed");
            ApiError::bad_request(first_message(&errors, T::FIELDS, T::NAME))
        })?;
        Ok(ValidatedJson(value))
    }
}

/// Walks fields in order; within a field a "required" failure wins.
fn first_message(errors: &ValidationErrors, fields: &[&str], name: &str) -> String {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .find_map(|errs| {
            errs.iter()
                .find(|e| e.code == "required")
                .or_else(|| errs.iter().find(|e| e.message.is_some()))
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .unwrap_or_else(|| format!("Failed to validate {} request", name))
}

/// Parses a path segment as a UUID, naming the entity on failure.
pub fn parse_id(raw: &str, entity: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("{} ID is not valid", entity)))
}

/// Empty strings are treated as "no URL".
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("must not be blank"));
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5, message = "Alpha must be 1-5 characters"))]
        alpha: String,
        #[validate(length(min = 1, message = "Beta is required"))]
        beta: String,
    }

    #[test]
    fn reports_first_field_in_order() {
        let sample = Sample {
            alpha: "too long".into(),
            beta: String::new(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, &["alpha", "beta"], "sample"),
            "Alpha must be 1-5 characters"
        );
        assert_eq!(
            first_message(&errors, &["beta", "alpha"], "sample"),
            "Beta is required"
        );
    }

    #[test]
    fn falls_back_to_generic_message() {
        let sample = Sample {
            alpha: String::new(),
            beta: "ok".into(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(first_message(&errors, &[], "sample"), "Failed to validate sample request");
    }

    #[test]
    fn parse_id_names_the_entity() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Blog").unwrap(), id);
        match parse_id("nope", "Blog") {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Blog ID is not valid"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Contact {
        #[validate(custom(function = "not_blank", message = "Email is required"))]
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn required_wins_within_a_field() {
        let errors = Contact { email: String::new() }.validate().unwrap_err();
        assert_eq!(first_message(&errors, &["email"], "contact"), "Email is required");

        let errors = Contact { email: "nope".into() }.validate().unwrap_err();
        assert_eq!(first_message(&errors, &["email"], "contact"), "Invalid email format");
    }

    #[test]
    fn optional_url_accepts_empty() {
        assert!(optional_url("").is_ok());
        assert!(optional_url("https://cdn.example.com/a.png").is_ok());
        assert!(optional_url("not a url").is_err());
    }
}
