//! Album art pipeline: local file -> embedded tag -> remote catalog -> placeholder.
//!
//! The request path only runs the local stages ([`CoverResolver`]); remote
//! lookups are queued for the single background worker
//! ([`spawn_cover_worker`]).

mod embedded;
mod ledger;
mod naming;
mod queue;
mod remote;
mod resolve;
mod store;
mod worker;

pub use ledger::CoverLedger;
pub use naming::{CoverKey, cover_file_name, sanitize};
pub use queue::{CoverQueue, CoverTask, SubmitOutcome};
pub use remote::{ArtworkLookup, ItunesLookup, upscale_artwork_url};
pub use resolve::CoverResolver;
pub use store::CoverStore;
pub use worker::spawn_cover_worker;
