use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::routes::{hint, list_cards, next_day, practice, progress, update, AppState};
use leitner_core::Engine;

pub fn router(engine: Arc<Engine>) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/api/practice", get(practice))
        .route("/api/hint", get(hint))
        .route("/api/update", post(update))
        .route("/api/progress", get(progress))
        .route("/api/day/next", post(next_day))
        .route("/api/cards", get(list_cards))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(engine: Arc<Engine>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(engine);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}
