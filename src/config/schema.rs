use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/jukebox/config.toml` or `~/.config/jukebox/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `JUKEBOX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub library: LibrarySettings,
    pub covers: CoverSettings,
    pub audio: AudioSettings,
    pub display: DisplaySettings,
    pub visualizer: VisualizerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the web UI listens on.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the audio files. The first CLI argument overrides it.
    pub music_dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from("Music"),
            extensions: vec!["mp3".into(), "wav".into(), "flac".into(), "m4a".into()],
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Where cover images are stored and served from.
    pub dir: PathBuf,
    /// URL path the covers directory is mounted at.
    pub url_prefix: String,
    /// URL returned when no art could be resolved.
    pub default_art: String,
    /// A local cover only counts as cached when it is larger than this.
    pub min_cached_bytes: u64,
    /// Capacity of the background fetch queue.
    pub queue_capacity: usize,
    /// Set to false to never hit the network for artwork.
    pub remote_enabled: bool,
    /// Search endpoint of the artwork catalog.
    pub lookup_url: String,
    pub request_timeout_ms: u64,
    /// Size token found in catalog artwork URLs...
    pub artwork_size_token: String,
    /// ...and what it is rewritten to before downloading.
    pub artwork_upscaled_token: String,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static/covers"),
            url_prefix: "/static/covers".to_string(),
            default_art: "/static/covers/default_art.png".to_string(),
            min_cached_bytes: 1024,
            queue_capacity: 256,
            remote_enabled: true,
            lookup_url: "https://itunes.apple.com/search".to_string(),
            request_timeout_ms: 5000,
            artwork_size_token: "100x100bb".to_string(),
            artwork_upscaled_token: "600x600bb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Skip the output device entirely and run the silent clock.
    pub force_silent: bool,
    /// How long `play` waits for the audio thread to confirm a load.
    pub load_timeout_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            force_silent: false,
            load_timeout_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 128,
            height: 32,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Redraw interval (milliseconds).
    pub tick_ms: u64,
    /// Multiplier applied to the previous levels each tick (0 < decay < 1).
    pub decay: f32,
    /// Height multiplier applied before capping at the panel height.
    pub gain: f32,
    /// Width of a single bar in pixels.
    pub bar_width: u32,
    /// Empty columns between bars.
    pub bar_gap: u32,
    /// Amount of audio sampled per tick (milliseconds).
    pub window_ms: u64,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            tick_ms: 40,
            decay: 0.85,
            gain: 1.5,
            bar_width: 4,
            bar_gap: 1,
            window_ms: 40,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
