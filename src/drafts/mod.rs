mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::{routing::get, Router};

pub use services::DraftService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drafts", get(handlers::get_all).post(handlers::add))
        .route(
            "/drafts/:draft_id",
            get(handlers::get)
                .put(handlers::update)
                .delete(handlers::remove),
        )
}
