//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename derivation and sanitization

pub mod naming;
pub mod paths;

pub use naming::{file_name_from_link, sanitize_filename, sanitize_path_component};
pub use paths::{ensure_dir, get_label_folder, get_output_path};
