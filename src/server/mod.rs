//! The single-page web shell: one text input, one submit button, one trace.

mod handler;
pub use handler::*;

mod page;
pub use page::*;

mod state;
pub use state::*;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(ask))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let addr = config.bind_address();
    let app = router(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{addr}");
    axum::serve(listener, app).await
}
