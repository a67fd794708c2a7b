use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::Bookmark;
use crate::blogs::repo_types::BlogSummary;

// ---- Bookmarks ----

pub async fn insert_bookmark(
    db: &PgPool,
    id: Uuid,
    owner: Uuid,
    name: &str,
    visible: bool,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO bookmarks (id, name, user_id, visible, created_at)
        VALUES ($1, $2, $3, $4, now())
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(owner)
    .bind(visible)
    .execute(db)
    .await?;
    Ok(())
}

/// Matches when `viewer` owns the bookmark or it is visible.
pub async fn fetch_visible(db: &PgPool, bookmark_id: Uuid, viewer: Uuid) -> sqlx::Result<Option<Bookmark>> {
    sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, name, user_id, visible, created_at
          FROM bookmarks
         WHERE id = $1 AND (user_id = $2 OR visible)
        "#,
    )
    .bind(bookmark_id)
    .bind(viewer)
    .fetch_optional(db)
    .await
}

pub async fn list_by_owner(db: &PgPool, owner: Uuid) -> sqlx::Result<Vec<Bookmark>> {
    sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, name, user_id, visible, created_at
          FROM bookmarks
         WHERE user_id = $1
         ORDER BY created_at DESC
        "#,
    )
    .bind(owner)
    .fetch_all(db)
    .await
}

pub async fn update_bookmark(
    db: &PgPool,
    bookmark_id: Uuid,
    owner: Uuid,
    name: &str,
    visible: bool,
) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"UPDATE bookmarks SET name = $1, visible = $2 WHERE id = $3 AND user_id = $4"#,
    )
    .bind(name)
    .bind(visible)
    .bind(bookmark_id)
    .bind(owner)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn delete_bookmark(db: &PgPool, bookmark_id: Uuid, owner: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(r#"DELETE FROM bookmarks WHERE id = $1 AND user_id = $2"#)
        .bind(bookmark_id)
        .bind(owner)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

// ---- Bookmark blogs ----

/// Inserts nothing unless `owner` owns the bookmark.
pub async fn insert_blog(db: &PgPool, bookmark_id: Uuid, blog_id: Uuid, owner: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"
        INSERT INTO bookmark_blogs (bookmark_id, blog_id, created_at)
        SELECT bm.id, $2, now()
          FROM bookmarks AS bm
         WHERE bm.id = $1 AND bm.user_id = $3
        "#,
    )
    .bind(bookmark_id)
    .bind(blog_id)
    .bind(owner)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn list_blogs(db: &PgPool, bookmark_id: Uuid, viewer: Uuid) -> sqlx::Result<Vec<BlogSummary>> {
    sqlx::query_as::<_, BlogSummary>(
        r#"
        SELECT b.id, b.title, b.ft_image, b.author_id, b.author, bb.created_at
          FROM bookmark_blogs AS bb
          JOIN bookmarks AS bm ON bm.id = bb.bookmark_id
          JOIN blogs AS b ON b.id = bb.blog_id
         WHERE bb.bookmark_id = $1 AND (bm.user_id = $2 OR bm.visible)
         ORDER BY bb.created_at DESC
        "#,
    )
    .bind(bookmark_id)
    .bind(viewer)
    .fetch_all(db)
    .await
}

pub async fn delete_blog(db: &PgPool, bookmark_id: Uuid, blog_id: Uuid, owner: Uuid) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"
        DELETE FROM bookmark_blogs AS bb
         USING bookmarks AS bm
         WHERE bb.bookmark_id = bm.id
           AND bb.bookmark_id = $1
           AND bb.blog_id = $2
           AND bm.user_id = $3
        "#,
    )
    .bind(bookmark_id)
    .bind(blog_id)
    .bind(owner)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}
