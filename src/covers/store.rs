use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CoverSettings;
use crate::error::CoverError;

use super::naming::CoverKey;

/// The covers directory and how its files map to URLs.
#[derive(Debug, Clone)]
pub struct CoverStore {
    dir: PathBuf,
    url_prefix: String,
    default_art: String,
    min_cached_bytes: u64,
}

impl CoverStore {
    pub fn new(settings: &CoverSettings) -> Self {
        Self {
            dir: settings.dir.clone(),
            url_prefix: settings.url_prefix.trim_end_matches('/').to_string(),
            default_art: settings.default_art.clone(),
            min_cached_bytes: settings.min_cached_bytes,
        }
    }

    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// URL path the covers directory is served under, without a trailing slash.
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn default_art(&self) -> &str {
        &self.default_art
    }

    pub fn path_for(&self, key: &CoverKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    pub fn url_for(&self, key: &CoverKey) -> String {
        format!("{}/{}", self.url_prefix, key.file_name())
    }

    #[cfg(test)]
    pub fn exists(&self, key: &CoverKey) -> bool {
        self.path_for(key).exists()
    }

    /// URL of the local cover if it is a regular file big enough to be a real image.
    pub fn cached_url(&self, key: &CoverKey) -> Option<String> {
        let meta = fs::metadata(self.path_for(key)).ok()?;
        (meta.is_file() && meta.len() > self.min_cached_bytes).then(|| self.url_for(key))
    }

    /// Write `bytes` as the cover for `key` and return its URL.
    pub fn save(&self, key: &CoverKey, bytes: &[u8]) -> Result<String, CoverError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        // Write next to the target and rename so a half-written file is never served.
        let tmp = path.with_extension("jpg.part");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(self.url_for(key))
    }
}
