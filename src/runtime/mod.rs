use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::audio::{AudioEngine, AudioPlayer, DecoderSamples};
use crate::covers::{
    ArtworkLookup, CoverLedger, CoverQueue, CoverResolver, CoverStore, ItunesLookup,
    spawn_cover_worker,
};
use crate::library::LibraryIndex;
use crate::playback::PlaybackController;
use crate::visualizer::{SharedVisuals, Visuals};
use crate::web::{self, AppState};

mod logging;
mod settings;

fn remote_lookup(settings: &crate::config::CoverSettings) -> Option<Arc<dyn ArtworkLookup>> {
    if !settings.remote_enabled {
        info!("remote cover lookup disabled");
        return None;
    }
    match ItunesLookup::new(settings) {
        Ok(lookup) => Some(Arc::new(lookup)),
        Err(e) => {
            warn!("remote cover lookup unavailable: {e}");
            None
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, problem) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = problem {
        warn!("{msg}");
    }

    if let Some(dir) = env::args().nth(1) {
        settings.library.music_dir = PathBuf::from(dir);
    }

    let library = Arc::new(LibraryIndex::new(
        settings.library.music_dir.clone(),
        settings.library.clone(),
    ));
    library.tracks();

    let store = CoverStore::new(&settings.covers);
    if let Err(e) = store.ensure_dir() {
        warn!("cannot create covers dir {}: {e}", store.dir().display());
    }
    let ledger = Arc::new(CoverLedger::default());
    let (queue, cover_rx) = CoverQueue::channel(settings.covers.queue_capacity, ledger.clone());
    let shutdown = CancellationToken::new();
    let worker = spawn_cover_worker(
        cover_rx,
        store.clone(),
        ledger,
        remote_lookup(&settings.covers),
        shutdown.clone(),
    );
    let covers = Arc::new(CoverResolver::new(store, queue));

    let player = Arc::new(AudioPlayer::new(&settings.audio));
    let visuals: SharedVisuals = Arc::new(Mutex::new(Visuals::headless(
        &settings.display,
        &settings.visualizer,
    )));
    visuals.lock().unwrap_or_else(|e| e.into_inner()).reset();

    let engine: Arc<dyn AudioEngine> = player.clone();
    let controller = Arc::new(PlaybackController::new(
        engine,
        library.clone(),
        Arc::new(DecoderSamples),
        visuals,
        Duration::from_millis(settings.visualizer.tick_ms),
    ));

    let listener = TcpListener::bind(&settings.server.bind).await?;

    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("shutting down"),
            Err(e) => warn!("cannot listen for ctrl-c: {e}"),
        }
        signal.cancel();
    });

    let state = AppState {
        controller: controller.clone(),
        library,
        covers,
    };
    let served = web::serve(listener, state, shutdown.clone()).await;

    shutdown.cancel();
    if let Err(e) = worker.await {
        warn!("cover worker ended abnormally: {e}");
    }
    tokio::task::spawn_blocking(move || {
        if let Some(track) = controller.snapshot().current {
            info!("stopping {}", track.file_name);
        }
        controller.stop();
        player.shutdown();
    })
    .await?;

    served?;
    Ok(())
}
