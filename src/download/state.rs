//! Download state tracking.

use std::path::PathBuf;

/// Per-destination download state.
#[derive(Debug, Default)]
pub struct DownloadState {
    // Destination info
    pub label: Option<String>,
    pub out_dir: PathBuf,

    // Statistics
    pub downloaded_count: u64,
    pub missing_count: u64,
    pub not_image_count: u64,
    pub failed_count: u64,
    pub index_failed_count: u64,
    pub bytes_written: u64,
}

impl DownloadState {
    /// Create a new download state for an output directory.
    pub fn new(label: Option<String>, out_dir: PathBuf) -> Self {
        Self {
            label,
            out_dir,
            ..Default::default()
        }
    }

    /// Record a saved image of `bytes` length.
    pub fn record_download(&mut self, bytes: u64) {
        self.downloaded_count += 1;
        self.bytes_written += bytes;
    }

    pub fn increment_missing(&mut self) {
        self.missing_count += 1;
    }

    pub fn increment_not_image(&mut self) {
        self.not_image_count += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed_count += 1;
    }

    pub fn increment_index_failed(&mut self) {
        self.index_failed_count += 1;
    }

    /// Get total skipped count.
    pub fn total_skipped(&self) -> u64 {
        self.missing_count + self.not_image_count + self.failed_count
    }
}

/// Global statistics across all destinations.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub downloaded_count: u64,
    pub missing_count: u64,
    pub not_image_count: u64,
    pub failed_count: u64,
    pub index_failed_count: u64,
    pub bytes_written: u64,
    pub destinations_processed: u64,
    pub malformed_lines: u64,
}

impl GlobalState {
    /// Add statistics from a destination's download state.
    pub fn add_state(&mut self, state: &DownloadState) {
        self.downloaded_count += state.downloaded_count;
        self.missing_count += state.missing_count;
        self.not_image_count += state.not_image_count;
        self.failed_count += state.failed_count;
        self.index_failed_count += state.index_failed_count;
        self.bytes_written += state.bytes_written;
        self.destinations_processed += 1;
    }

    /// Mark a manifest line as skipped.
    pub fn mark_malformed_line(&mut self) {
        self.malformed_lines += 1;
    }

    /// Get total skipped count.
    pub fn total_skipped(&self) -> u64 {
        self.missing_count + self.not_image_count + self.failed_count
    }
}
