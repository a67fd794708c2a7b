use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::Tag;

pub async fn insert_tag(db: &PgPool, id: Uuid, name: &str) -> sqlx::Result<()> {
    sqlx::query(r#"INSERT INTO tags (id, name) VALUES ($1, $2)"#)
        .bind(id)
        .bind(name)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Tag>> {
    sqlx::query_as::<_, Tag>(r#"SELECT id, name FROM tags WHERE id = $1"#)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_by_name(db: &PgPool, name: &str) -> sqlx::Result<Option<Tag>> {
    sqlx::query_as::<_, Tag>(r#"SELECT id, name FROM tags WHERE name = $1"#)
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Tag>> {
    sqlx::query_as::<_, Tag>(r#"SELECT id, name FROM tags ORDER BY name"#)
        .fetch_all(db)
        .await
}
