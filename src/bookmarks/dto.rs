use serde::Deserialize;
use validator::Validate;

use crate::extract::{not_blank, RequestBody};

/// Body of both create and update.
#[derive(Debug, Deserialize, Validate)]
pub struct BookmarkRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    #[validate(length(max = 30, message = "Name cannot be more than 30 characters long"))]
    pub name: String,

    #[serde(default)]
    pub visible: bool,
}

impl RequestBody for BookmarkRequest {
    const NAME: &'static str = "bookmark";
    const FIELDS: &'static [&'static str] = &["name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_defaults_to_false() {
        let req: BookmarkRequest = serde_json::from_str(r#"{"name":"later"}"#).unwrap();
        assert!(!req.visible);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn name_limit_is_thirty_chars() {
        let req = BookmarkRequest {
            name: "n".repeat(31),
            visible: true,
        };
        assert!(req.validate().is_err());
    }
}
