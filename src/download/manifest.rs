//! Manifest parsing.
//!
//! A manifest is plain text with one `<label> <url>` pair per line. Tokens
//! after the second are ignored.

use std::path::Path;

use crate::error::{Error, Result};

/// A single `<label> <url>` manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub label: String,
    pub source_url: String,
}

/// Classification of one manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine {
    Entry(ManifestEntry),
    Blank,
    /// Fewer than two tokens.
    Malformed(String),
}

/// Parse a single manifest line.
pub fn parse_line(line: &str) -> ManifestLine {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(label), Some(url)) => ManifestLine::Entry(ManifestEntry {
            label: label.to_string(),
            source_url: url.to_string(),
        }),
        (None, _) => ManifestLine::Blank,
        (Some(_), None) => ManifestLine::Malformed(line.trim().to_string()),
    }
}

/// Read and classify every line of a manifest file, in file order.
pub async fn read_manifest(path: &Path) -> Result<Vec<ManifestLine>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(content.lines().map(parse_line).collect())
}
