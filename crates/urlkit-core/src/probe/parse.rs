//! Parse HTTP response header lines into a ResponseHead.

/// Metadata read from the final response to a HEAD request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// HTTP status code (0 if no status line was seen).
    pub status: u32,
    /// Declared size in bytes, if `Content-Length` is present and numeric.
    pub content_length: Option<u64>,
    /// True if server sent `Accept-Ranges: bytes`.
    pub accept_ranges: bool,
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

/// Parse collected header lines.
///
/// When redirects are followed every hop's headers arrive in one stream; each
/// status line starts a new response, so only the last one is kept.
pub(crate) fn parse_response_head(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ResponseHead {
                status: parse_status(line).unwrap_or(0),
                ..ResponseHead::default()
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                head.content_length = value.parse::<u64>().ok();
            } else if name.eq_ignore_ascii_case("accept-ranges") {
                head.accept_ranges = value.eq_ignore_ascii_case("bytes");
            } else if name.eq_ignore_ascii_case("etag") {
                head.etag = Some(value.trim_matches('"').to_string());
            } else if name.eq_ignore_ascii_case("last-modified") {
                head.last_modified = Some(value.to_string());
            }
        }
    }

    head
}

fn parse_status(line: &str) -> Option<u32> {
    line.split_whitespace().nth(1)?.parse().ok()
}
