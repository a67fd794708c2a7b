use sqlx::PgPool;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{
    repo,
    repo_types::{BlogSummary, BlogWithTags, NewBlog},
};
use crate::{
    db::ConstraintViolation,
    error::{ServiceError, ServiceResult},
};

#[derive(Clone)]
pub struct BlogService {
    db: PgPool,
}

fn blog_tags_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_foreign_key("blog_tags_tag_id_fkey") => ServiceError::TagNotFound,
        _ => ServiceError::Database(err),
    }
}

fn history_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_foreign_key("reading_history_blog_id_fkey") => ServiceError::BlogNotFound,
        _ => ServiceError::Database(err),
    }
}

/// Drops repeated ids, keeping first occurrence order.
fn distinct(ids: &[Uuid]) -> Vec<Uuid> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}

impl BlogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Inserts the blog and its tag links atomically. On any error the
    /// transaction is dropped and nothing is written.
    #[instrument(skip(self, blog, tag_ids), fields(blog_id = %blog.id, tags = tag_ids.len()))]
    pub async fn publish(&self, blog: &NewBlog, tag_ids: &[Uuid]) -> ServiceResult<()> {
        let mut tx = self.db.begin().await?;

        let author = repo::author_username_tx(&mut tx, blog.author_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        repo::insert_blog_tx(&mut tx, blog, &author).await?;

        let tag_ids = distinct(tag_ids);
        if !tag_ids.is_empty() {
            repo::insert_blog_tags_tx(&mut tx, blog.id, &tag_ids)
                .await
                .map_err(blog_tags_error)?;
        }

        tx.commit().await?;
        debug!("blog published");
        Ok(())
    }

    /// Fetches a blog with its tags. With a viewer, the reading-history
    /// upsert runs as a separate task alongside the fetch and is always
    /// joined; its failure wins over a fetch failure.
    #[instrument(skip(self))]
    pub async fn get(&self, blog_id: Uuid, viewer: Option<Uuid>) -> ServiceResult<BlogWithTags> {
        let history = viewer.map(|user_id| {
            let db = self.db.clone();
            tokio::spawn(async move { repo::upsert_history(&db, user_id, blog_id).await })
        });

        let fetched = self.fetch(blog_id).await;

        if let Some(handle) = history {
            handle.await?.map_err(history_error)?;
        }
        fetched
    }

    async fn fetch(&self, blog_id: Uuid) -> ServiceResult<BlogWithTags> {
        let blog = repo::fetch_blog(&self.db, blog_id)
            .await?
            .ok_or(ServiceError::BlogNotFound)?;

        let tags = match repo::fetch_tags(&self.db, blog_id).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!(error = %e, %blog_id, "failed to load blog tags; returning none");
                Vec::new()
            }
        };

        Ok(BlogWithTags { blog, tags })
    }

    pub async fn list_by_author(&self, author_id: Uuid) -> ServiceResult<Vec<BlogSummary>> {
        let blogs = repo::list_by_author(&self.db, author_id).await?;
        if blogs.is_empty() {
            return Err(ServiceError::BlogNotFound);
        }
        Ok(blogs)
    }
}
