use std::collections::HashSet;
use std::sync::Mutex;

use super::naming::CoverKey;
use super::queue::SubmitOutcome;

#[derive(Debug, Default)]
struct LedgerSets {
    cached: HashSet<CoverKey>,
    attempted: HashSet<CoverKey>,
}

/// Keys already resolved (`cached`) or already handed to the worker
/// (`attempted`). Callers consult it before enqueueing so each key is
/// fetched at most once per process.
#[derive(Debug, Default)]
pub struct CoverLedger {
    sets: Mutex<LedgerSets>,
}

impl CoverLedger {
    pub fn mark_cached(&self, key: CoverKey) {
        self.lock().cached.insert(key);
    }

    #[cfg(test)]
    pub fn is_cached(&self, key: &CoverKey) -> bool {
        self.lock().cached.contains(key)
    }

    pub fn is_attempted(&self, key: &CoverKey) -> bool {
        self.lock().attempted.contains(key)
    }

    /// Reserve `key` for a fetch. Fails with the reason when it is already known.
    pub(super) fn claim(&self, key: &CoverKey) -> Result<(), SubmitOutcome> {
        let mut sets = self.lock();
        if sets.cached.contains(key) {
            return Err(SubmitOutcome::Cached);
        }
        if !sets.attempted.insert(key.clone()) {
            return Err(SubmitOutcome::Attempted);
        }
        Ok(())
    }

    /// Undo a claim whose task never made it into the queue.
    pub(super) fn release(&self, key: &CoverKey) {
        self.lock().attempted.remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerSets> {
        self.sets.lock().unwrap_or_else(|e| e.into_inner())
    }
}
