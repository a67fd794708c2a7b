use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub visible: bool, // readable by anyone when true
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
