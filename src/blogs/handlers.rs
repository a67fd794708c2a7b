use axum::{
    extract::{Path, State},
    response::Response,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{dto::PublishBlogRequest, repo_types::NewBlog};
use crate::{
    auth::{AuthUser, MaybeAuthUser},
    error::{ApiError, ApiResult, ServiceError},
    extract::{parse_id, ValidatedJson},
    response::{self, Created},
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn publish(
    State(state): State<AppState>,
    AuthUser(author_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<PublishBlogRequest>,
) -> ApiResult<Response> {
    let tag_ids = payload.tag_ids();
    let blog = NewBlog {
        id: Uuid::new_v4(),
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        ft_image: payload.ft_image,
        author_id,
        created_at: OffsetDateTime::now_utc(),
    };

    state.blogs.publish(&blog, &tag_ids).await.map_err(|e| {
        warn!(error = %e, "failed to publish blog");
        ApiError::from(e)
    })?;

    info!(blog_id = %blog.id, %author_id, "blog published");
    Ok(response::created(
        "Blog published successfully",
        Created { id: blog.id },
    ))
}

#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<Response> {
    let blog_id = parse_id(&blog_id, "Blog")?;
    let blog = state.blogs.get(blog_id, viewer).await?;
    Ok(response::ok("Fetched blog successfully", blog))
}

#[instrument(skip(state))]
pub async fn list_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> ApiResult<Response> {
    let author_id = parse_id(&author_id, "Author")?;
    let blogs = state
        .blogs
        .list_by_author(author_id)
        .await
        .map_err(|e| match e {
            ServiceError::BlogNotFound => ApiError::not_found("This author has no blogs"),
            e => e.into(),
        })?;
    Ok(response::ok("Fetched blogs successfully", blogs))
}
