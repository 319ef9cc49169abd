//! HTTP module.
//!
//! This module provides:
//! - The `Transport` trait the downloader is written against
//! - A reqwest-backed implementation with per-request timeouts

pub mod client;
pub mod transport;

pub use client::HttpClient;
pub use transport::Transport;
