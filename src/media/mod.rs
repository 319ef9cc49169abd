//! Media module for link extraction and image detection.

pub mod links;
pub mod signature;

pub use links::{decode_candidate, extract_candidate_links, split_lines};
pub use signature::{detect_image_format, is_image, ImageFormat, Signature, SIGNATURES};
