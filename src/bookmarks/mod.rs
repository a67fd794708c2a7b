mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub use services::BookmarkService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(handlers::get_all).post(handlers::add))
        .route(
            "/bookmarks/:bookmark_id",
            get(handlers::get)
                .put(handlers::update)
                .delete(handlers::remove),
        )
        .route("/bookmarks/:bookmark_id/blogs", get(handlers::get_blogs))
        .route(
            "/bookmarks/:bookmark_id/:blog_id",
            post(handlers::add_blog).delete(handlers::remove_blog),
        )
}
