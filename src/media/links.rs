//! Candidate link extraction from index pages.

/// Line separator used by index pages.
const LINE_SEPARATOR: &[u8] = b"\r\n";

/// Split an index body on CRLF into raw byte lines.
///
/// A body without a separator yields one line, and an empty body yields a
/// single empty line.
pub fn split_lines(body: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = body;

    while let Some(pos) = find(rest, LINE_SEPARATOR) {
        lines.push(&rest[..pos]);
        rest = &rest[pos + LINE_SEPARATOR.len()..];
    }
    lines.push(rest);

    lines
}

/// Decode one raw line into a candidate link.
pub fn decode_candidate(line: &[u8]) -> String {
    String::from_utf8_lossy(line).trim().to_string()
}

/// Extract every candidate link from an index body, in page order.
pub fn extract_candidate_links(body: &[u8]) -> Vec<String> {
    split_lines(body).into_iter().map(decode_candidate).collect()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
