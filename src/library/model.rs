use std::path::PathBuf;

use crate::covers::CoverKey;

/// One playable file plus the metadata shown in the web UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    /// Bare file name, used to address the track from `/play_song/<name>`.
    pub file_name: String,
    pub title: String,
    pub artist: String,
    /// Deterministic name of the local cover image for (artist, title).
    pub cover_file: String,
}

impl Track {
    /// File name without its extension; what status messages show.
    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.file_name)
    }

    pub fn cover_key(&self) -> CoverKey {
        CoverKey::new(&self.artist, &self.title)
    }
}
