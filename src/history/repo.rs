use sqlx::PgPool;
use uuid::Uuid;

use crate::blogs::repo_types::BlogSummary;

/// Newest reads first.
pub async fn list_entries(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<BlogSummary>> {
    sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT b.id, b.title, b.ft_image, b.author_id, b.author, rh.created_at
          FROM reading_history AS rh
          JOIN blogs AS b ON b.id = rh.blog_id
         WHERE rh.user_id = $1
         ORDER BY rh.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn delete_entry(db: &PgPool, user_id: Uuid, blog_id: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(r#"DELETE FROM reading_history WHERE user_id = $1 AND blog_id = $2"#)
        .bind(user_id)
        .bind(blog_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_all(db: &PgPool, user_id: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(r#"DELETE FROM reading_history WHERE user_id = $1"#)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}
