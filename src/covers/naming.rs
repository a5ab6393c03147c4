use std::fmt;

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `<sanitized artist>-<sanitized title>.jpg`
pub fn cover_file_name(artist: &str, title: &str) -> String {
    format!("{}-{}.jpg", sanitize(artist), sanitize(title))
}

/// Identity of a cover: one image per (artist, title).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CoverKey {
    pub artist: String,
    pub title: String,
}

impl CoverKey {
    pub fn new(artist: &str, title: &str) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
        }
    }

    pub fn file_name(&self) -> String {
        cover_file_name(&self.artist, &self.title)
    }
}

impl fmt::Display for CoverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.artist, self.title)
    }
}
