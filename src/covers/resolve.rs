use tracing::{debug, trace, warn};

use crate::library::Track;

use super::embedded::embedded_art;
use super::queue::{CoverQueue, CoverTask, SubmitOutcome};
use super::store::CoverStore;

/// Synchronous front of the cover pipeline, used on the request path.
pub struct CoverResolver {
    store: CoverStore,
    queue: CoverQueue,
}

impl CoverResolver {
    pub fn new(store: CoverStore, queue: CoverQueue) -> Self {
        Self { store, queue }
    }

    pub fn store(&self) -> &CoverStore {
        &self.store
    }

    /// Cover URL for `track`. Only touches local files; when nothing is
    /// available yet the placeholder comes back and a background fetch is
    /// queued (once per key).
    pub fn resolve(&self, track: &Track) -> String {
        let key = track.cover_key();
        let ledger = self.queue.ledger();

        if let Some(url) = self.store.cached_url(&key) {
            ledger.mark_cached(key);
            return url;
        }
        if ledger.is_attempted(&key) {
            return self.store.default_art().to_string();
        }

        match embedded_art(&track.path) {
            Ok(Some(bytes)) => match self.store.save(&key, &bytes) {
                Ok(url) => {
                    ledger.mark_cached(key);
                    return url;
                }
                Err(e) => warn!("failed to save embedded cover for {key}: {e}"),
            },
            Ok(None) => {}
            Err(e) => trace!("no embedded art in {}: {e}", track.file_name),
        }

        match self.queue.submit(CoverTask::from_track(track)) {
            SubmitOutcome::Queued => debug!("queued cover fetch for {key}"),
            SubmitOutcome::Full => debug!("cover queue full, {key} will be retried later"),
            SubmitOutcome::Closed => warn!("cover worker is not running"),
            SubmitOutcome::Cached | SubmitOutcome::Attempted => {}
        }
        self.store.default_art().to_string()
    }
}
