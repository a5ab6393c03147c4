//! Title/artist derivation for scanned files.
//!
//! Tags win when present. Missing fields are filled from the file stem, which
//! is expected to look like `Artist - Title` (or `Title - Artist`, see
//! [`split_artist_title`]). The split is a heuristic and only best effort.

use std::path::Path;

use lofty::prelude::*;

pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Title and artist as read from the file's primary (or first) tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagNames {
    pub title: Option<String>,
    pub artist: Option<String>,
}

pub fn read_tag_names(path: &Path) -> Result<TagNames, lofty::error::LoftyError> {
    let tagged = lofty::read_from_path(path)?;
    let mut names = TagNames::default();

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        names.title = tag.title().map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        names.artist = tag.artist().map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    }

    Ok(names)
}

/// Split a file stem on the first `" - "` into `(artist, title)`.
///
/// When the right half is short (three words or fewer) and carries an
/// uppercase letter it is taken to be the artist, i.e. `Title - Artist`.
pub fn split_artist_title(stem: &str) -> Option<(String, String)> {
    let (first, second) = stem.split_once(" - ")?;
    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }

    let looks_like_artist =
        second.split_whitespace().count() <= 3 && second.chars().any(char::is_uppercase);

    if looks_like_artist {
        Some((second.to_string(), first.to_string()))
    } else {
        Some((first.to_string(), second.to_string()))
    }
}

/// Uppercase the first letter of every whitespace-separated word, lowercase the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Combine tag values with filename-derived fallbacks. Never returns empty strings.
pub fn resolve_names(file_name: &str, stem: &str, tags: TagNames) -> (String, String) {
    let parsed = split_artist_title(stem);

    let artist = tags
        .artist
        .or_else(|| parsed.as_ref().map(|(a, _)| title_case(a)))
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    let title = tags
        .title
        .or_else(|| parsed.as_ref().map(|(_, t)| title_case(t)))
        .or_else(|| Some(stem.trim().to_string()).filter(|s| !s.is_empty()))
        .or_else(|| Some(file_name.to_string()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    (title, artist)
}
