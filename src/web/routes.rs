use super::handlers;
use super::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/page/:slug", get(handlers::pages::view))
        .route("/create", post(handlers::api::create_page))
        .route(
            "/api/page/:slug/save-youtube",
            post(handlers::api::save_youtube),
        )
        .route("/api/vote/:slug/:video_id/:action", post(handlers::api::vote))
        .fallback(handlers::pages::not_found)
}
