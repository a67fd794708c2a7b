pub mod handlers;
mod repo;
pub mod services;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub use services::ReadLaterService;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/readlater", get(handlers::get))
        .route(
            "/readlater/:blog_id",
            post(handlers::add).delete(handlers::remove),
        )
}
