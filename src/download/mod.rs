//! Download module for dataset collection.
//!
//! This module provides:
//! - Manifest parsing
//! - Manifest-driven collection into per-label folders
//! - Index page fetching, probing and image downloading
//! - Download state tracking

pub mod collector;
pub mod fetcher;
pub mod manifest;
pub mod state;

pub use collector::collect;
pub use fetcher::{fetch, resource_exists};
pub use manifest::{parse_line, read_manifest, ManifestEntry, ManifestLine};
pub use state::{DownloadState, GlobalState};
