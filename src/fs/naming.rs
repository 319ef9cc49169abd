//! Filename derivation and sanitization.

use url::Url;

use crate::error::{Error, Result};

/// Validate a filename taken verbatim from a link.
///
/// Only names that could escape the output directory are rejected: `.`,
/// `..`, anything containing a path separator or NUL, and empty names.
pub fn sanitize_filename(name: &str) -> Result<String> {
    reject_traversal(name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    Ok(name.to_string())
}

/// Sanitize a path component such as a manifest label.
///
/// Separators are replaced with `_` rather than rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    reject_traversal(name)?;

    Ok(name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect())
}

fn reject_traversal(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Name cannot be empty or whitespace-only".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    Ok(())
}

/// Derive the output filename for a candidate link.
///
/// Uses the last path segment. Query strings and fragments are dropped when
/// the link parses as a URL; otherwise the raw text after the last `/` is used.
pub fn file_name_from_link(link: &str) -> Result<String> {
    let segment = match Url::parse(link) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        Err(_) => link.rsplit('/').next().unwrap_or_default().to_string(),
    };

    if segment.is_empty() {
        return Err(Error::InvalidFilename(format!(
            "No file name in link: '{}'",
            link
        )));
    }

    sanitize_filename(&segment)
}
