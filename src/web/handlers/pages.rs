use crate::error::WikiError;
use crate::models::YouTubeVideo;
use crate::services::{links, pages, slug, votes};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Datelike;
use std::sync::Arc;
use tera::Context;

fn make_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("year", &chrono::Utc::now().year());
    ctx
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let slugs = pages::list_pages(&state.store)?;

    let mut ctx = make_context(&state);
    ctx.insert("slugs", &slugs);

    let html = state.templates.render("index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn view(
    State(state): State<Arc<AppState>>,
    Path(raw_slug): Path<String>,
) -> AppResult<Response> {
    // Base-name normalization is the traversal guard: nothing below this
    // line can reach outside the data directories.
    let slug = slug::safe_slug(&raw_slug);
    if slug.is_empty() {
        return render_not_found(&state);
    }

    let body = match pages::read_page(&state.store, &slug) {
        Ok(body) => body,
        Err(WikiError::NotFound(_)) => return render_not_found(&state),
        Err(err) => return Err(err.into()),
    };

    let counts = votes::tally(&state.store, &slug)?;
    let videos: Vec<YouTubeVideo> = links::list_links(&state.store, &slug)?
        .into_iter()
        .map(|link| YouTubeVideo {
            votes: counts.get(&link.video_id).copied().unwrap_or(0),
            id: link.video_id,
            embed_url: link.embed_url,
        })
        .collect();

    let mut ctx = make_context(&state);
    ctx.insert("title", &slug);
    ctx.insert("body", &body);
    ctx.insert("videos", &videos);

    let html = state.templates.render("page.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    render_not_found(&state)
}

fn render_not_found(state: &AppState) -> AppResult<Response> {
    let ctx = make_context(state);
    let html = state.templates.render("404.html", &ctx)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
