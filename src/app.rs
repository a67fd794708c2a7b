use std::time::Duration;

use anyhow::Context;
use axum::{http::StatusCode, response::Response, routing::get, Router};
use sqlx::PgPool;
use tokio::sync::oneshot;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::{blogs, bookmarks, drafts, history, readlater, response, tags, users};

async fn health() -> Response {
    response::message(StatusCode::OK, "Server Health OK")
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .route("/health", get(health))
                .merge(users::router())
                .merge(blogs::router())
                .merge(drafts::router())
                .merge(bookmarks::router())
                .merge(readlater::router())
                .merge(history::router())
                .merge(tags::router()),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!(
                        "http_request",
                        %method,
                        uri = %uri,
                        status = tracing::field::Empty
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>, latency: Duration, span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, ?latency, "response");
                        } else {
                            tracing::info!(%status, ?latency, "response");
                        }
                    },
                ),
        )
}

/// Serves until SIGINT/SIGTERM, gives in-flight requests up to
/// `shutdown_grace_secs` to finish, then closes the pool.
pub async fn serve(app: Router, db: PgPool, server: &ServerConfig) -> anyhow::Result<()> {
    let addr = server.bind_address();
    let grace = Duration::from_secs(server.shutdown_grace_secs);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    info!("listening on {}", listener.local_addr()?);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let serving = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = signalled_tx.send(());
            })
            .await
    };
    let deadline = async move {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        res = serving => res?,
        _ = deadline => warn!(?grace, "grace period elapsed; dropping open connections"),
    }

    db.close().await;
    info!("postgresql connection pool closed");
    info!("server stopped gracefully");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, starting shutdown"),
        _ = terminate => info!("received SIGTERM, starting shutdown"),
    }
}
