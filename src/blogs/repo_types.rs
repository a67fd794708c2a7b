use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::tags::repo_types::Tag;

/// Blog row as written by publish. `author` is filled inside the transaction.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub ft_image: String,
    pub author_id: Uuid,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub ft_image: String,
    pub author_id: Uuid,
    pub author: String, // username at publish time
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogWithTags {
    #[serde(flatten)]
    pub blog: Blog,
    pub tags: Vec<Tag>,
}

/// Listing shape shared by bookmarks, history, read-later and author pages.
/// `created_at` is the time of the listing event (bookmarked, read, queued)
/// except on author pages, where it is the publish time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    pub ft_image: String,
    pub author_id: Uuid,
    pub author: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
