//! Dataset Downloader - collect image datasets from remote index pages.
//!
//! An index page is a plain-text resource whose CRLF-separated lines are
//! image URLs. Every line is probed with a HEAD request, downloaded when it
//! exists, and saved only if its bytes start with a known JPEG, PNG or GIF
//! signature.
//!
//! # Features
//!
//! - Manifest files mapping labels to index pages, one folder per label
//! - Direct index page downloads
//! - Magic-number image verification
//! - Per-request timeouts and a TOML configuration file
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dataset_downloader::{fetch, Config, DownloadState, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = HttpClient::new(&config.http, true)?;
//!     let out = Path::new("dataset");
//!     let mut state = DownloadState::new(None, out.to_path_buf());
//!
//!     fetch(&client, &config, &["http://example.com/index.txt".to_string()], out, &mut state)
//!         .await;
//!     println!("saved {} images", state.downloaded_count);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod http;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use download::{collect, fetch, DownloadState, GlobalState};
pub use error::{Error, Result};
pub use http::{HttpClient, Transport};
pub use media::{detect_image_format, is_image, ImageFormat};
