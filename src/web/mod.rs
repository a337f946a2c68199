mod error;
mod handlers;
mod routes;
mod state;

pub use state::AppState;

use crate::store::Store;
use crate::Config;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub async fn serve(config: Config, store: Store, addr: &str) -> Result<()> {
    let state = Arc::new(AppState::new(config, store)?);

    let app = routes::routes()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
