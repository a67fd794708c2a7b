use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{repo, repo_types::Tag};
use crate::{
    db::ConstraintViolation,
    error::{ServiceError, ServiceResult},
};

#[derive(Clone)]
pub struct TagService {
    db: PgPool,
}

fn add_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_unique("tags_name_key") => ServiceError::TagInUse,
        _ => ServiceError::Database(err),
    }
}

/// How a path identifier addresses a tag.
#[derive(Debug, PartialEq, Eq)]
enum TagLookup<'a> {
    Id(Uuid),
    Name(&'a str),
}

impl<'a> From<&'a str> for TagLookup<'a> {
    fn from(identifier: &'a str) -> Self {
        match Uuid::parse_str(identifier) {
            Ok(id) => TagLookup::Id(id),
            Err(_) => TagLookup::Name(identifier),
        }
    }
}

impl TagService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn add(&self, name: &str) -> ServiceResult<Uuid> {
        let id = Uuid::new_v4();
        repo::insert_tag(&self.db, id, name).await.map_err(add_error)?;
        debug!(tag_id = %id, "tag added");
        Ok(id)
    }

    /// Looks a tag up by id when the identifier is a UUID, by name otherwise.
    pub async fn get(&self, identifier: &str) -> ServiceResult<Tag> {
        let tag = match TagLookup::from(identifier) {
            TagLookup::Id(id) => repo::find_by_id(&self.db, id).await?,
            TagLookup::Name(name) => repo::find_by_name(&self.db, name).await?,
        };
        tag.ok_or(ServiceError::TagNotFound)
    }

    pub async fn list(&self) -> ServiceResult<Vec<Tag>> {
        Ok(repo::list_all(&self.db).await?)
    }
}
