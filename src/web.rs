//! HTTP facade.
//!
//! | Path | Answer |
//! |------|--------|
//! | `/` | control page |
//! | `/play`, `/pause`, `/resume`, `/stop`, `/next`, `/prev` | status text |
//! | `/play_song/{filename}` | status text |
//! | `/status` | status text |
//! | `/library` | HTML list of files |
//! | `/library_json` | JSON list with cover URLs |
//! | `/rescan` | rebuilds the library index |
//! | `/static/covers/*` | cover images |

mod handlers;
mod pages;
mod routes;

pub use routes::{AppState, router};

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve until `shutdown` is cancelled, then finish in-flight requests.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("jukebox listening on http://{addr}");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
