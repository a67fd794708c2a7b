use serde::Deserialize;
use validator::Validate;

use crate::extract::{not_blank, RequestBody};

#[derive(Debug, Deserialize, Validate)]
pub struct AddTagRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    #[validate(length(max = 50, message = "Name cannot be more than 50 characters long"))]
    pub name: String,
}

impl RequestBody for AddTagRequest {
    const NAME: &'static str = "add tag";
    const FIELDS: &'static [&'static str] = &["name"];
}
