use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::covers::CoverResolver;
use crate::library::LibraryIndex;
use crate::playback::PlaybackController;

use super::handlers;

/// Shared state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PlaybackController>,
    pub library: Arc<LibraryIndex>,
    pub covers: Arc<CoverResolver>,
}

pub fn router(state: AppState) -> Router {
    let covers = ServeDir::new(state.covers.store().dir());
    let prefix = state.covers.store().url_prefix().to_string();

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/play", get(handlers::play))
        .route("/pause", get(handlers::pause))
        .route("/resume", get(handlers::resume))
        .route("/stop", get(handlers::stop))
        .route("/next", get(handlers::next))
        .route("/prev", get(handlers::prev))
        .route("/play_song/{filename}", get(handlers::play_song))
        .route("/status", get(handlers::status))
        .route("/library", get(handlers::library))
        .route("/library_json", get(handlers::library_json))
        .route("/rescan", get(handlers::rescan));

    let app = if prefix.is_empty() {
        app.fallback_service(covers)
    } else {
        app.nest_service(&prefix, covers)
    };
    app.with_state(state)
}
