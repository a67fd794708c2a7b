use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewUser, UserProfile};

/// `last_login_at` starts out equal to `joined_at`.
pub async fn insert_user(db: &PgPool, user: &NewUser) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password, bio, avatar, joined_at, last_login_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.bio)
    .bind(&user.avatar)
    .bind(user.joined_at)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn find_credentials(db: &PgPool, username: &str) -> sqlx::Result<Option<(Uuid, String)>> {
    sqlx::query_as::<_, (Uuid, String)>(r#"SELECT id, password FROM users WHERE username = $1"#)
        .bind(username)
        .fetch_optional(db)
        .await
}

pub async fn touch_last_login(db: &PgPool, user_id: Uuid) -> sqlx::Result<()> {
    sqlx::query(r#"UPDATE users SET last_login_at = now() WHERE id = $1"#)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn fetch_profile(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<UserProfile>> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, email, bio, avatar, followers, following, joined_at, last_login_at
          FROM users
         WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
}
