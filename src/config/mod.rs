//! Configuration module for the dataset-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{default_config_path, Config, HttpConfig, OptionsConfig};
pub use validation::validate_config;
