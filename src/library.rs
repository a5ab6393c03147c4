//! Music library: directory scan, per-file metadata and the memoized index.

mod index;
mod metadata;
mod model;
mod scan;

pub use index::LibraryIndex;
pub use model::Track;

#[cfg(test)]
mod tests;
