//! Transport abstraction over the network.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Minimal HTTP surface the downloader needs.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the full body. Non-success statuses are errors.
    async fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;

    /// HEAD `url` without following redirects and return the status code.
    async fn head(&self, url: &str, timeout: Duration) -> Result<u16>;
}
