use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::library::Track;

use super::ledger::CoverLedger;
use super::naming::CoverKey;

/// A background cover resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverTask {
    pub path: PathBuf,
    pub artist: String,
    pub title: String,
    pub file_name: String,
}

impl CoverTask {
    pub fn from_track(track: &Track) -> Self {
        Self {
            path: track.path.clone(),
            artist: track.artist.clone(),
            title: track.title.clone(),
            file_name: track.file_name.clone(),
        }
    }

    pub fn key(&self) -> CoverKey {
        CoverKey::new(&self.artist, &self.title)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handed to the worker.
    Queued,
    /// Key already has a local cover.
    Cached,
    /// Key was queued before; it is not retried.
    Attempted,
    /// Queue is at capacity; the key stays eligible for a later submit.
    Full,
    /// Worker is gone.
    Closed,
}

/// Producer side of the bounded cover queue.
#[derive(Clone)]
pub struct CoverQueue {
    tx: mpsc::Sender<CoverTask>,
    ledger: Arc<CoverLedger>,
}

impl CoverQueue {
    pub fn channel(capacity: usize, ledger: Arc<CoverLedger>) -> (Self, mpsc::Receiver<CoverTask>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx, ledger }, rx)
    }

    pub fn ledger(&self) -> &Arc<CoverLedger> {
        &self.ledger
    }

    /// Enqueue `task` unless its key is already cached or attempted. Never blocks.
    pub fn submit(&self, task: CoverTask) -> SubmitOutcome {
        let key = task.key();
        if let Err(outcome) = self.ledger.claim(&key) {
            return outcome;
        }

        match self.tx.try_send(task) {
            Ok(()) => SubmitOutcome::Queued,
            Err(TrySendError::Full(_)) => {
                self.ledger.release(&key);
                SubmitOutcome::Full
            }
            Err(TrySendError::Closed(_)) => {
                self.ledger.release(&key);
                SubmitOutcome::Closed
            }
        }
    }
}
