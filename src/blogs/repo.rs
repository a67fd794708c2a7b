use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use super::repo_types::{Blog, BlogSummary, NewBlog};
use crate::tags::repo_types::Tag;

// ---- Publish (transactional) ----

/// Username of the author, denormalized onto the blog row.
pub async fn author_username_tx(
    tx: &mut Transaction<'_, Postgres>,
    author_id: Uuid,
) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(r#"SELECT username FROM users WHERE id = $1"#)
        .bind(author_id)
        .fetch_optional(&mut **tx)
        .await
}

pub async fn insert_blog_tx(
    tx: &mut Transaction<'_, Postgres>,
    blog: &NewBlog,
    author: &str,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO blogs (id, title, subtitle, content, ft_image, author_id, author, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        "#,
    )
    .bind(blog.id)
    .bind(&blog.title)
    .bind(&blog.subtitle)
    .bind(&blog.content)
    .bind(&blog.ft_image)
    .bind(blog.author_id)
    .bind(author)
    .bind(blog.created_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// All join rows in a single statement. `tag_ids` must be non-empty.
pub async fn insert_blog_tags_tx(
    tx: &mut Transaction<'_, Postgres>,
    blog_id: Uuid,
    tag_ids: &[Uuid],
) -> sqlx::Result<()> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO blog_tags (blog_id, tag_id) ");
    qb.push_values(tag_ids, |mut row, tag_id| {
        row.push_bind(blog_id).push_bind(*tag_id);
    });
    qb.build().execute(&mut **tx).await?;
    Ok(())
}

// ---- Reads ----

pub async fn fetch_blog(db: &PgPool, blog_id: Uuid) -> sqlx::Result<Option<Blog>> {
    sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, title, subtitle, content, ft_image, author_id, author, created_at, updated_at
          FROM blogs
         WHERE id = $1
        "#,
    )
    .bind(blog_id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_tags(db: &PgPool, blog_id: Uuid) -> sqlx::Result<Vec<Tag>> {
    sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name
          FROM blog_tags AS bt
          JOIN tags AS t ON bt.tag_id = t.id
         WHERE bt.blog_id = $1
         ORDER BY t.name
        "#,
    )
    .bind(blog_id)
    .fetch_all(db)
    .await
}

pub async fn list_by_author(db: &PgPool, author_id: Uuid) -> sqlx::Result<Vec<BlogSummary>> {
    sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT id, title, ft_image, author_id, author, created_at
          FROM blogs
         WHERE author_id = $1
         ORDER BY created_at DESC
        "#,
    )
    .bind(author_id)
    .fetch_all(db)
    .await
}

// ---- Reading history ----

/// Records a read; a repeat read only moves the timestamp.
pub async fn upsert_history(db: &PgPool, user_id: Uuid, blog_id: Uuid) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO reading_history (user_id, blog_id, created_at)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id, blog_id)
        DO UPDATE SET created_at = excluded.created_at
        "#,
    )
    .bind(user_id)
    .bind(blog_id)
    .execute(db)
    .await?;
    Ok(())
}
