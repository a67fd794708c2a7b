use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    repo,
    repo_types::{Draft, DraftContent},
};
use crate::error::{ServiceError, ServiceResult};

/// Drafts are private; every lookup is scoped to the author.
#[derive(Clone)]
pub struct DraftService {
    db: PgPool,
}

impl DraftService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, draft))]
    pub async fn add(&self, author_id: Uuid, draft: &DraftContent) -> ServiceResult<Uuid> {
        let id = Uuid::new_v4();
        repo::insert_draft(&self.db, id, author_id, draft, OffsetDateTime::now_utc()).await?;
        debug!(draft_id = %id, "draft saved");
        Ok(id)
    }

    pub async fn get(&self, draft_id: Uuid, author_id: Uuid) -> ServiceResult<Draft> {
        repo::fetch_draft(&self.db, draft_id, author_id)
            .await?
            .ok_or(ServiceError::DraftNotFound)
    }

    pub async fn get_all(&self, author_id: Uuid) -> ServiceResult<Vec<Draft>> {
        let drafts = repo::list_by_author(&self.db, author_id).await?;
        if drafts.is_empty() {
            return Err(ServiceError::DraftNotFound);
        }
        Ok(drafts)
    }

    #[instrument(skip(self, draft))]
    pub async fn update(
        &self,
        draft_id: Uuid,
        author_id: Uuid,
        draft: &DraftContent,
    ) -> ServiceResult<()> {
        if repo::update_draft(&self.db, draft_id, author_id, draft).await? == 0 {
            return Err(ServiceError::DraftNotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, draft_id: Uuid, author_id: Uuid) -> ServiceResult<()> {
        if repo::delete_draft(&self.db, draft_id, author_id).await? == 0 {
            return Err(ServiceError::DraftNotFound);
        }
        Ok(())
    }
}
