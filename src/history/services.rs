use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::repo;
use crate::{
    blogs::repo_types::BlogSummary,
    error::{ServiceError, ServiceResult},
};

/// Reads and clears reading history. Entries are written by the blog
/// service when a signed-in reader opens a blog.
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

impl HistoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: Uuid) -> ServiceResult<Vec<BlogSummary>> {
        let history = repo::list_entries(&self.db, user_id).await?;
        if history.is_empty() {
            return Err(ServiceError::HistoryNotFound);
        }
        Ok(history)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Uuid, blog_id: Uuid) -> ServiceResult<()> {
        if repo::delete_entry(&self.db, user_id, blog_id).await? == 0 {
            return Err(ServiceError::HistoryNotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_all(&self, user_id: Uuid) -> ServiceResult<()> {
        if repo::delete_all(&self.db, user_id).await? == 0 {
            return Err(ServiceError::HistoryNotFound);
        }
        Ok(())
    }
}
