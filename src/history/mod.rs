pub mod handlers;
mod repo;
pub mod services;

use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub use services::HistoryService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(handlers::get).delete(handlers::remove_all))
        .route("/history/:blog_id", delete(handlers::remove))
}
