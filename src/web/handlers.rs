use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::playback::PlaybackController;

use super::pages;
use super::routes::AppState;

const TITLE_LIMIT: usize = 30;

/// One entry of `/library_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub filename: String,
    pub title: String,
    pub artist: String,
    pub art: String,
}

fn internal_error(what: &str, e: impl std::fmt::Display) -> Response {
    error!("{what} failed: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error.").into_response()
}

/// Run a controller call off the async workers; the audio thread reply can
/// take a while.
async fn with_controller<F>(state: &AppState, f: F) -> Response
where
    F: FnOnce(&PlaybackController) -> String + Send + 'static,
{
    let controller = state.controller.clone();
    match tokio::task::spawn_blocking(move || f(&controller)).await {
        Ok(msg) => msg.into_response(),
        Err(e) => internal_error("playback call", e),
    }
}

pub(super) fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let mut short: String = title.chars().take(TITLE_LIMIT).collect();
        short.push('…');
        short
    } else {
        title.to_string()
    }
}

pub(super) async fn index() -> Html<&'static str> {
    Html(pages::INDEX_HTML)
}

pub(super) async fn play(State(state): State<AppState>) -> Response {
    with_controller(&state, |c| c.play(None)).await
}

pub(super) async fn play_song(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    with_controller(&state, move |c| c.play(Some(&filename))).await
}

pub(super) async fn pause(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::pause).await
}

pub(super) async fn resume(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::resume).await
}

pub(super) async fn stop(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::stop).await
}

pub(super) async fn next(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::next).await
}

pub(super) async fn prev(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::previous).await
}

pub(super) async fn status(State(state): State<AppState>) -> Response {
    with_controller(&state, PlaybackController::status).await
}

pub(super) async fn library(State(state): State<AppState>) -> Response {
    let library = state.library.clone();
    match tokio::task::spawn_blocking(move || pages::library_html(&library.tracks())).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error("library listing", e),
    }
}

pub(super) async fn library_json(State(state): State<AppState>) -> Response {
    let library = state.library.clone();
    let covers = state.covers.clone();

    let listing = tokio::task::spawn_blocking(move || {
        library
            .tracks()
            .iter()
            .map(|track| LibraryEntry {
                filename: track.file_name.clone(),
                title: truncate_title(&track.title),
                artist: track.artist.clone(),
                art: covers.resolve(track),
            })
            .collect::<Vec<_>>()
    })
    .await;

    match listing {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => internal_error("library listing", e),
    }
}

pub(super) async fn rescan(State(state): State<AppState>) -> Response {
    let library = state.library.clone();
    match tokio::task::spawn_blocking(move || library.rescan()).await {
        Ok(n) => {
            info!("library rescanned, {n} songs");
            format!("Library rescanned: {n} songs.").into_response()
        }
        Err(e) => internal_error("rescan", e),
    }
}
