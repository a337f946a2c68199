use crate::models::{PageCreated, VoteDirection};
use crate::services::{links, pages, slug, votes};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CreatePageRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SaveYouTubeRequest {
    pub youtube_url: String,
}

/// POST /create
///
/// Redirects to the page either way: 303 when it was just created, 302
/// when a page with that slug was already there.
pub async fn create_page(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreatePageRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(req) = body?;

    let outcome = pages::create_page(&state.store, &req.name)?;
    let target = format!("/page/{}", outcome.slug());

    Ok(match outcome {
        PageCreated::Created(slug) => {
            tracing::info!("Created page: {}", slug);
            Redirect::to(&target).into_response()
        }
        PageCreated::AlreadyExists(slug) => {
            tracing::info!("Page already exists, redirecting: {}", slug);
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
    })
}

/// POST /api/page/:slug/save-youtube
pub async fn save_youtube(
    State(state): State<Arc<AppState>>,
    Path(page_slug): Path<String>,
    body: Result<Json<SaveYouTubeRequest>, JsonRejection>,
) -> AppResult<Response> {
    slug::validate_name(&page_slug)?;
    let Json(req) = body?;

    let link = links::append_link(&state.store, &page_slug, &req.youtube_url)?;
    tracing::info!("Saved YouTube link for page: {}", page_slug);

    Ok(Json(serde_json::json!({
        "video_id": link.video_id,
        "embed_url": link.embed_url,
    }))
    .into_response())
}

/// POST /api/vote/:slug/:video_id/:action
pub async fn vote(
    State(state): State<Arc<AppState>>,
    Path((page_slug, video_id, action)): Path<(String, String, String)>,
) -> AppResult<Response> {
    slug::validate_name(&page_slug)?;
    let direction: VoteDirection = action.parse()?;

    let count = votes::vote(&state.store, &page_slug, &video_id, direction)?;
    tracing::info!("Recorded {} for video {} on page {}", direction, video_id, page_slug);

    Ok(Json(serde_json::json!({
        "video_id": video_id,
        "votes": count,
    }))
    .into_response())
}
