use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingSettings;

/// `RUST_LOG` if set, else the configured filter, else `info`.
fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(settings: &LoggingSettings) {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    if let Err(e) = tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(fmt_layer)
        .try_init()
    {
        eprintln!("jukebox: logging already initialized: {e}");
    }
}
