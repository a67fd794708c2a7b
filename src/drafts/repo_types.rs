use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Draft {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Editable part of a draft.
#[derive(Debug, Clone)]
pub struct DraftContent {
    pub title: String,
    pub subtitle: String,
    pub content: String,
}
