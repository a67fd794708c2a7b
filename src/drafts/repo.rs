use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Draft, DraftContent};

pub async fn insert_draft(
    db: &PgPool,
    id: Uuid,
    author_id: Uuid,
    draft: &DraftContent,
    now: OffsetDateTime,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO drafts (id, title, subtitle, content, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        "#,
    )
    .bind(id)
    .bind(&draft.title)
    .bind(&draft.subtitle)
    .bind(&draft.content)
    .bind(author_id)
    .bind(now)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn fetch_draft(db: &PgPool, draft_id: Uuid, author_id: Uuid) -> sqlx::Result<Option<Draft>> {
    sqlx::query_as::<_, Draft>(
        r#"
        SELECT id, title, subtitle, content, author_id, created_at, updated_at
          FROM drafts
         WHERE id = $1 AND author_id = $2
        "#,
    )
    .bind(draft_id)
    .bind(author_id)
    .fetch_optional(db)
    .await
}

/// Most recently edited first.
pub async fn list_by_author(db: &PgPool, author_id: Uuid) -> sqlx::Result<Vec<Draft>> {
    sqlx::query_as::<_, Draft>(
        r#"
        SELECT id, title, subtitle, content, author_id, created_at, updated_at
          FROM drafts
         WHERE author_id = $1
         ORDER BY updated_at DESC
        "#,
    )
    .bind(author_id)
    .fetch_all(db)
    .await
}

/// Returns the number of rows touched.
pub async fn update_draft(
    db: &PgPool,
    draft_id: Uuid,
    author_id: Uuid,
    draft: &DraftContent,
) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"
        UPDATE drafts
           SET title = $1, subtitle = $2, content = $3, updated_at = now()
         WHERE id = $4 AND author_id = $5
        "#,
    )
    .bind(&draft.title)
    .bind(&draft.subtitle)
    .bind(&draft.content)
    .bind(draft_id)
    .bind(author_id)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_draft(db: &PgPool, draft_id: Uuid, author_id: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(r#"DELETE FROM drafts WHERE id = $1 AND author_id = $2"#)
        .bind(draft_id)
        .bind(author_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}
