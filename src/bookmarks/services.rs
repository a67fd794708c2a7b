use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{repo, repo_types::Bookmark};
use crate::{
    blogs::repo_types::BlogSummary,
    db::ConstraintViolation,
    error::{ServiceError, ServiceResult},
};

/// Named collections of blogs. Writes are owner-scoped; reads are allowed
/// to the owner, or to anyone when the bookmark is visible.
#[derive(Clone)]
pub struct BookmarkService {
    db: PgPool,
}

fn name_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_unique("unique_bookmarks_name") => ServiceError::BookmarkNameInUse,
        _ => ServiceError::Database(err),
    }
}

fn add_blog_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_unique("unique_bookmark_blogs_bookmark_id_blog_id") => {
            ServiceError::BlogAlreadyInBookmark
        }
        Some(v) if v.is_foreign_key("bookmark_blogs_blog_id_fkey") => ServiceError::BlogNotFound,
        _ => ServiceError::Database(err),
    }
}

impl BookmarkService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn add(&self, owner: Uuid, name: &str, visible: bool) -> ServiceResult<Uuid> {
        let id = Uuid::new_v4();
        repo::insert_bookmark(&self.db, id, owner, name, visible)
            .await
            .map_err(name_error)?;
        debug!(bookmark_id = %id, "bookmark added");
        Ok(id)
    }

    pub async fn get(&self, bookmark_id: Uuid, viewer: Uuid) -> ServiceResult<Bookmark> {
        repo::fetch_visible(&self.db, bookmark_id, viewer)
            .await?
            .ok_or(ServiceError::BookmarkNotFound)
    }

    pub async fn get_all(&self, owner: Uuid) -> ServiceResult<Vec<Bookmark>> {
        let bookmarks = repo::list_by_owner(&self.db, owner).await?;
        if bookmarks.is_empty() {
            return Err(ServiceError::BookmarkNotFound);
        }
        Ok(bookmarks)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        bookmark_id: Uuid,
        owner: Uuid,
        name: &str,
        visible: bool,
    ) -> ServiceResult<()> {
        let touched = repo::update_bookmark(&self.db, bookmark_id, owner, name, visible)
            .await
            .map_err(name_error)?;
        if touched == 0 {
            return Err(ServiceError::BookmarkNotFound);
        }
        Ok(())
    }

    /// Join rows are removed by the foreign key cascade.
    #[instrument(skip(self))]
    pub async fn remove(&self, bookmark_id: Uuid, owner: Uuid) -> ServiceResult<()> {
        if repo::delete_bookmark(&self.db, bookmark_id, owner).await? == 0 {
            return Err(ServiceError::BookmarkNotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_blog(&self, bookmark_id: Uuid, blog_id: Uuid, owner: Uuid) -> ServiceResult<()> {
        let inserted = repo::insert_blog(&self.db, bookmark_id, blog_id, owner)
            .await
            .map_err(add_blog_error)?;
        if inserted == 0 {
            return Err(ServiceError::BookmarkNotFound);
        }
        Ok(())
    }

    pub async fn get_blogs(&self, bookmark_id: Uuid, viewer: Uuid) -> ServiceResult<Vec<BlogSummary>> {
        let blogs = repo::list_blogs(&self.db, bookmark_id, viewer).await?;
        if blogs.is_empty() {
            return Err(ServiceError::BlogNotFound);
        }
        Ok(blogs)
    }

    #[instrument(skip(self))]
    pub async fn remove_blog(&self, bookmark_id: Uuid, blog_id: Uuid, owner: Uuid) -> ServiceResult<()> {
        if repo::delete_blog(&self.db, bookmark_id, blog_id, owner).await? == 0 {
            return Err(ServiceError::BlogNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fake;

    #[test]
    fn name_clash_maps_to_name_in_use() {
        assert!(matches!(
            name_error(fake::unique("unique_bookmarks_name")),
            ServiceError::BookmarkNameInUse
        ));
        assert!(matches!(name_error(fake::other("x")), ServiceError::Database(_)));
    }

    #[test]
    fn add_blog_distinguishes_duplicate_and_missing_blog() {
        assert!(matches!(
            add_blog_error(fake::unique("unique_bookmark_blogs_bookmark_id_blog_id")),
            ServiceError::BlogAlreadyInBookmark
        ));
        assert!(matches!(
            add_blog_error(fake::foreign_key("bookmark_blogs_blog_id_fkey")),
            ServiceError::BlogNotFound
        ));
        assert!(matches!(
            add_blog_error(fake::foreign_key("bookmark_blogs_bookmark_id_fkey")),
            ServiceError::Database(_)
        ));
    }
}
