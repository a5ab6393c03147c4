use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `JUKEBOX__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("JUKEBOX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let viz = &self.visualizer;
        if !(viz.decay > 0.0 && viz.decay < 1.0) {
            return Err("visualizer.decay must be between 0 and 1 (exclusive)".to_string());
        }
        if viz.gain <= 0.0 {
            return Err("visualizer.gain must be > 0".to_string());
        }
        if viz.tick_ms == 0 {
            return Err("visualizer.tick_ms must be >= 1".to_string());
        }
        if viz.bar_width == 0 {
            return Err("visualizer.bar_width must be >= 1".to_string());
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err("display.width and display.height must be >= 1".to_string());
        }
        if self.display.width < viz.bar_width + viz.bar_gap {
            return Err("display.width must fit at least one bar".to_string());
        }
        if self.covers.queue_capacity == 0 {
            return Err("covers.queue_capacity must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `JUKEBOX_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("JUKEBOX_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/jukebox/config.toml`
/// or `~/.config/jukebox/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("jukebox").join("config.toml"))
}
