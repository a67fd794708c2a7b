use sqlx::PgPool;
use uuid::Uuid;

use crate::blogs::repo_types::BlogSummary;

pub async fn insert_entry(db: &PgPool, user_id: Uuid, blog_id: Uuid) -> sqlx::Result<()> {
    sqlx::query(r#"INSERT INTO read_later (user_id, blog_id, created_at) VALUES ($1, $2, now())"#)
        .bind(user_id)
        .bind(blog_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_entry(db: &PgPool, user_id: Uuid, blog_id: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(r#"DELETE FROM read_later WHERE user_id = $1 AND blog_id = $2"#)
        .bind(user_id)
        .bind(blog_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_blogs(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<BlogSummary>> {
    sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT b.id, b.title, b.ft_image, b.author_id, b.author, rl.created_at
          FROM read_later AS rl
          JOIN blogs AS b ON b.id = rl.blog_id
         WHERE rl.user_id = $1
         ORDER BY rl.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
