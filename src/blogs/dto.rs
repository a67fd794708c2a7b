use std::borrow::Cow;

use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::extract::{not_blank, optional_url, RequestBody};

pub const MAX_TAGS: usize = 10;

fn tag_ids(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        let mut err = ValidationError::new("max_tags");
        err.message = Some(Cow::Borrowed("Blog cannot have more than 10 tags"));
        return Err(err);
    }
    if tags.iter().any(|t| Uuid::parse_str(t).is_err()) {
        let mut err = ValidationError::new("uuid");
        err.message = Some(Cow::Borrowed("Tag ID is not valid"));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct PublishBlogRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    #[validate(length(max = 130, message = "Title cannot be more than 130 characters long"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Subtitle is required"))]
    #[validate(length(max = 170, message = "Subtitle cannot be more than 170 characters long"))]
    pub subtitle: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Content cannot be empty"))]
    pub content: String,

    #[serde(default)]
    #[validate(custom(function = "optional_url", message = "Invalid feature image format"))]
    pub ft_image: String,

    #[serde(default)]
    #[validate(custom(function = "tag_ids"))]
    pub tags: Vec<String>,
}

impl RequestBody for PublishBlogRequest {
    const NAME: &'static str = "publish blog";
    const FIELDS: &'static [&'static str] = &["title", "subtitle", "content", "ft_image", "tags"];
}

impl PublishBlogRequest {
    /// Parsed tag ids; call after validation.
    pub fn tag_ids(&self) -> Vec<Uuid> {
        self.tags
            .iter()
            .filter_map(|t| Uuid::parse_str(t).ok())
            .collect()
    }
}
