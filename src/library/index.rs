use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::LibrarySettings;

use super::model::Track;
use super::scan::scan;

/// Memoized view of the music directory.
///
/// The first call to [`LibraryIndex::tracks`] scans the directory; later calls
/// reuse that snapshot until [`LibraryIndex::invalidate`] or
/// [`LibraryIndex::rescan`] is called.
pub struct LibraryIndex {
    dir: PathBuf,
    settings: LibrarySettings,
    tracks: RwLock<Option<Arc<Vec<Track>>>>,
}

impl LibraryIndex {
    pub fn new(dir: impl Into<PathBuf>, settings: LibrarySettings) -> Self {
        Self {
            dir: dir.into(),
            settings,
            tracks: RwLock::new(None),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Current snapshot, scanning on first use.
    pub fn tracks(&self) -> Arc<Vec<Track>> {
        if let Some(tracks) = self
            .tracks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return tracks.clone();
        }

        let mut slot = self.tracks.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have scanned while we waited for the write lock.
        if let Some(tracks) = slot.as_ref() {
            return tracks.clone();
        }
        let tracks = Arc::new(scan(&self.dir, &self.settings));
        *slot = Some(tracks.clone());
        tracks
    }

    /// Drop the snapshot; the next `tracks()` call rescans.
    pub fn invalidate(&self) {
        *self.tracks.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Invalidate and rebuild right away. Returns the new track count.
    pub fn rescan(&self) -> usize {
        self.invalidate();
        self.tracks().len()
    }

    /// Position and track whose file name is exactly `file_name`.
    pub fn find_by_file_name(&self, file_name: &str) -> Option<(usize, Track)> {
        self.tracks()
            .iter()
            .enumerate()
            .find(|(_, t)| t.file_name == file_name)
            .map(|(i, t)| (i, t.clone()))
    }
}
