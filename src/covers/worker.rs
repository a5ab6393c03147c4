use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::embedded::embedded_art;
use super::ledger::CoverLedger;
use super::queue::CoverTask;
use super::remote::ArtworkLookup;
use super::store::CoverStore;

/// Spawn the single cover consumer. Tasks are handled strictly one at a time
/// in submission order, so at most one remote request is in flight.
pub fn spawn_cover_worker(
    mut rx: mpsc::Receiver<CoverTask>,
    store: CoverStore,
    ledger: Arc<CoverLedger>,
    lookup: Option<Arc<dyn ArtworkLookup>>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let task = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                next = rx.recv() => match next {
                    Some(task) => task,
                    None => break,
                },
            };

            let key = task.key();
            match ensure_cover(&task, &store, lookup.as_deref()).await {
                Some(url) => {
                    info!("cover ready for {key}: {url}");
                    ledger.mark_cached(key);
                }
                None => debug!("no cover for {key} ({})", task.file_name),
            }
        }
        debug!("cover worker stopped");
    })
}

/// Local file, then embedded art, then the remote catalog. Every failure
/// degrades to `None`.
pub(super) async fn ensure_cover(
    task: &CoverTask,
    store: &CoverStore,
    lookup: Option<&dyn ArtworkLookup>,
) -> Option<String> {
    let key = task.key();
    if let Some(url) = store.cached_url(&key) {
        return Some(url);
    }

    let path = task.path.clone();
    match tokio::task::spawn_blocking(move || embedded_art(&path)).await {
        Ok(Ok(Some(bytes))) => match store.save(&key, &bytes) {
            Ok(url) => return Some(url),
            Err(e) => warn!("failed to save embedded cover for {key}: {e}"),
        },
        Ok(Ok(None)) => {}
        Ok(Err(e)) => debug!("no embedded art in {}: {e}", task.file_name),
        Err(e) => warn!("embedded art reader panicked for {}: {e}", task.file_name),
    }

    let lookup = lookup?;
    match lookup.fetch(&task.artist, &task.title).await {
        Ok(Some(bytes)) => match store.save(&key, &bytes) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("failed to save cover for {key}: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("error fetching cover art for {key}: {e}");
            None
        }
    }
}
