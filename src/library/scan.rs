use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::covers::cover_file_name;

use super::metadata::{TagNames, read_tag_names, resolve_names};
use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn build_track(path: &Path) -> Track {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let tags = read_tag_names(path).unwrap_or_else(|e| {
        debug!("tag read failed for {}: {e}", path.display());
        TagNames::default()
    });

    let (title, artist) = resolve_names(&file_name, &stem, tags);
    let cover_file = cover_file_name(&artist, &title);

    Track {
        path: path.to_path_buf(),
        file_name,
        title,
        artist,
        cover_file,
    }
}

/// Scan `dir` for playable files. Unreadable entries are skipped, unreadable
/// tags fall back to filename metadata; this never fails.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(build_track(path));
        }
    }

    tracks.sort_by(|a, b| {
        a.file_name
            .to_lowercase()
            .cmp(&b.file_name.to_lowercase())
            .then_with(|| a.path.cmp(&b.path))
    });
    info!("loaded {} songs from {}", tracks.len(), dir.display());
    tracks
}
