//! reqwest-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{redirect, Client};

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::http::transport::Transport;
use crate::output::create_download_bar;

/// Minimum body size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// HTTP client used for index pages, probes and downloads.
pub struct HttpClient {
    client: Client,
    probe_client: Client,
    show_progress: bool,
}

impl HttpClient {
    /// Create a new client from the HTTP configuration.
    pub fn new(config: &HttpConfig, show_progress: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        // Probes report redirects as-is instead of following them.
        let probe_client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            probe_client,
            show_progress,
        })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).timeout(timeout).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_length = response.content_length();
        let progress = match content_length {
            Some(len) if self.show_progress && len > PROGRESS_THRESHOLD => {
                Some(create_download_bar(len))
            }
            _ => None,
        };

        let capacity = content_length.unwrap_or(0).min(PROGRESS_THRESHOLD) as usize;
        let mut body = Vec::with_capacity(capacity);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            body.extend_from_slice(&chunk);

            if let Some(ref pb) = progress {
                pb.set_position(body.len() as u64);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(body)
    }

    async fn head(&self, url: &str, timeout: Duration) -> Result<u16> {
        tracing::debug!("HEAD {}", url);

        let response = self.probe_client.head(url).timeout(timeout).send().await?;
        Ok(response.status().as_u16())
    }
}
