use serde::Deserialize;
use validator::Validate;

use super::repo_types::DraftContent;
use crate::extract::{not_blank, RequestBody};

/// Body of both create and update.
#[derive(Debug, Deserialize, Validate)]
pub struct DraftRequest {
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
}

impl RequestBody for DraftRequest {
    const NAME: &'static str = "draft";
    const FIELDS: &'static [&'static str] = &["title", "subtitle", "content"];
}

impl From<DraftRequest> for DraftContent {
    fn from(req: DraftRequest) -> Self {
        Self {
            title: req.title,
            subtitle: req.subtitle,
            content: req.content,
        }
    }
}
