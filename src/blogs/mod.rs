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

pub use services::BlogService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(handlers::publish))
        .route("/blogs/:blog_id", get(handlers::get))
        .route("/blogs/author/:author_id", get(handlers::list_by_author))
}
