mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::{routing::get, Router};

pub use services::TagService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(handlers::list).post(handlers::add))
        .route("/tags/:identifier", get(handlers::get))
}
