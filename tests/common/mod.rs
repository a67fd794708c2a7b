#![allow(dead_code)]

use std::sync::Arc;

use bloggy::{
    blogs::{repo_types::NewBlog, BlogService},
    config::{AppConfig, JwtConfig},
    state::AppState,
    tags::TagService,
    users::{repo_types::NewUser, UserService},
};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        id: Uuid::new_v4(),
        username: username.into(),
        email: format!("{}@example.com", username),
        password_hash: "not-a-real-hash".into(),
        bio: String::new(),
        avatar: String::new(),
        joined_at: OffsetDateTime::now_utc(),
    }
}

pub async fn seed_user(pool: &PgPool, username: &str) -> Uuid {
    let user = new_user(username);
    UserService::new(pool.clone())
        .register(&user)
        .await
        .expect("seed user");
    user.id
}

pub async fn seed_tag(pool: &PgPool, name: &str) -> Uuid {
    TagService::new(pool.clone()).add(name).await.expect("seed tag")
}

pub fn new_blog(author_id: Uuid, title: &str) -> NewBlog {
    NewBlog {
        id: Uuid::new_v4(),
        title: title.into(),
        subtitle: "subtitle".into(),
        content: "content".into(),
        ft_image: String::new(),
        author_id,
        created_at: OffsetDateTime::now_utc(),
    }
}

pub async fn seed_blog(pool: &PgPool, author_id: Uuid, title: &str) -> Uuid {
    let blog = new_blog(author_id, title);
    BlogService::new(pool.clone())
        .publish(&blog, &[])
        .await
        .expect("seed blog");
    blog.id
}

pub async fn count(pool: &PgPool, sql: &str, id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("count query")
}

pub fn config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: Default::default(),
        postgres: None,
        database_url: None,
        jwt: JwtConfig {
            secret: "integration-secret".into(),
            issuer: "bloggy-tests".into(),
            audience: "bloggy-tests".into(),
            ttl_minutes: 5,
        },
    })
}

/// Application state over a migrated test pool.
pub fn state(pool: PgPool) -> AppState {
    AppState::from_parts(pool, config())
}
