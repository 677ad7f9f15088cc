//! The two HEAD request shapes used by the probes.

use std::time::Duration;
use url::Url;

/// Capability-probe range. Small and arbitrary; no data is actually wanted.
pub const RANGE_PROBE: &str = "bytes=5-10";

/// A HEAD request to hand to a [`super::HeadTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadRequest {
    pub url: Url,
    /// Extra request headers in send order. An empty value is sent as an
    /// empty header, not omitted.
    pub headers: Vec<(&'static str, String)>,
    pub timeout: Duration,
}

impl HeadRequest {
    /// Plain HEAD that bypasses local and intermediate caches.
    pub fn plain(url: &Url, timeout: Duration) -> Self {
        Self {
            url: url.clone(),
            headers: vec![
                ("Cache-Control", "no-cache".to_string()),
                ("Pragma", "no-cache".to_string()),
            ],
            timeout,
        }
    }

    /// Size probe: no content-encoding negotiation so the length is the identity length.
    pub fn size_probe(url: &Url, timeout: Duration) -> Self {
        Self::plain(url, timeout).with_header("Accept-Encoding", "")
    }

    /// Range-support probe.
    pub fn range_probe(url: &Url, timeout: Duration) -> Self {
        Self::plain(url, timeout).with_header("Range", RANGE_PROBE)
    }

    fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/file.iso").unwrap()
    }

    #[test]
    fn size_probe_shape() {
        let r = HeadRequest::size_probe(&url(), Duration::from_secs(30));
        assert_eq!(r.header("accept-encoding"), Some(""));
        assert_eq!(r.header("Cache-Control"), Some("no-cache"));
        assert_eq!(r.header("Pragma"), Some("no-cache"));
        assert!(r.header("Range").is_none());
        assert_eq!(r.timeout, Duration::from_secs(30));
    }

    #[test]
    fn range_probe_shape() {
        let r = HeadRequest::range_probe(&url(), Duration::from_secs(5));
        assert_eq!(r.header("Range"), Some("bytes=5-10"));
        assert_eq!(r.header("Cache-Control"), Some("no-cache"));
        assert!(r.header("Accept-Encoding").is_none());
        assert_eq!(r.url, url());
    }
}
