use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::repo;
use crate::{
    blogs::repo_types::BlogSummary,
    db::ConstraintViolation,
    error::{ServiceError, ServiceResult},
};

#[derive(Clone)]
pub struct ReadLaterService {
    db: PgPool,
}

fn add_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_unique("unique_read_later_user_id_blog_id") => ServiceError::AlreadyInReadLater,
        Some(v) if v.is_foreign_key("read_later_blog_id_fkey") => ServiceError::BlogNotFound,
        _ => ServiceError::Database(err),
    }
}

impl ReadLaterService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn add(&self, user_id: Uuid, blog_id: Uuid) -> ServiceResult<()> {
        repo::insert_entry(&self.db, user_id, blog_id)
            .await
            .map_err(add_error)?;
        debug!("queued for later");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Uuid, blog_id: Uuid) -> ServiceResult<()> {
        if repo::delete_entry(&self.db, user_id, blog_id).await? == 0 {
            return Err(ServiceError::BlogNotFound);
        }
        Ok(())
    }

    pub async fn get(&self, user_id: Uuid) -> ServiceResult<Vec<BlogSummary>> {
        let blogs = repo::list_blogs(&self.db, user_id).await?;
        if blogs.is_empty() {
            return Err(ServiceError::ReadLaterEmpty);
        }
        Ok(blogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fake;

    #[test]
    fn add_maps_duplicate_and_dangling_blog() {
        assert!(matches!(
            add_error(fake::unique("unique_read_later_user_id_blog_id")),
            ServiceError::AlreadyInReadLater
        ));
        assert!(matches!(
            add_error(fake::foreign_key("read_later_blog_id_fkey")),
            ServiceError::BlogNotFound
        ));
        assert!(matches!(
            add_error(fake::foreign_key("read_later_user_id_fkey")),
            ServiceError::Database(_)
        ));
    }
}
