use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    repo,
    repo_types::{NewUser, UserProfile},
};
use crate::{
    db::ConstraintViolation,
    error::{ServiceError, ServiceResult},
};

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

fn register_error(err: sqlx::Error) -> ServiceError {
    match ConstraintViolation::of(&err) {
        Some(v) if v.is_unique("users_username_key") => ServiceError::UsernameInUse,
        Some(v) if v.is_unique("users_email_key") => ServiceError::EmailInUse,
        _ => ServiceError::Database(err),
    }
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn register(&self, user: &NewUser) -> ServiceResult<()> {
        repo::insert_user(&self.db, user)
            .await
            .map_err(register_error)?;
        debug!(user_id = %user.id, "user inserted");
        Ok(())
    }

    /// Returns the id and password hash for a login attempt.
    pub async fn get_id_password_by_username(&self, username: &str) -> ServiceResult<(Uuid, String)> {
        repo::find_credentials(&self.db, username)
            .await?
            .ok_or(ServiceError::UserNotFound)
    }

    pub async fn touch_last_login(&self, user_id: Uuid) -> ServiceResult<()> {
        Ok(repo::touch_last_login(&self.db, user_id).await?)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<UserProfile> {
        repo::fetch_profile(&self.db, user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)
    }
}
