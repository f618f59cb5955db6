//! Asset storage boundary and the process-wide memoization cache.
//!
//! Everything above this module treats game assets as a read-only logical
//! namespace: existence is probed before fetching, absence is common and
//! expected, and transport failures read as absence.

mod cache;
mod client;

pub use cache::{AssetCache, MemoTable};
pub use client::{AssetStore, FsAssetStore, MemoryAssetStore, normalize_asset_path};
