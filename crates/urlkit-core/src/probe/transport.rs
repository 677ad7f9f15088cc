//! Blocking HEAD transports.

use std::str;
use std::time::Duration;

use super::parse::{parse_response_head, ResponseHead};
use super::{HeadRequest, ProbeError};
use crate::config::ProbeConfig;

/// Something that can execute one blocking HEAD request.
///
/// Implementations are called from a background thread, never from the
/// caller of the probe.
pub trait HeadTransport: Send + Sync + 'static {
    fn head(&self, request: &HeadRequest) -> Result<ResponseHead, ProbeError>;
}

/// HEAD over libcurl. One `Easy` handle per request; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    config: ProbeConfig,
}

impl CurlTransport {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl HeadTransport for CurlTransport {
    fn head(&self, request: &HeadRequest) -> Result<ResponseHead, ProbeError> {
        if request.timeout.is_zero() {
            return Err(ProbeError::ZeroTimeout);
        }
        let mut lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(request.url.as_str())?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(self.config.follow_redirects)?;
        if self.config.follow_redirects {
            easy.max_redirections(self.config.max_redirects)?;
        }
        easy.timeout(curl_timeout(request.timeout))?;
        if let Some(connect) = self.config.connect_timeout() {
            easy.connect_timeout(curl_timeout(connect.min(request.timeout)))?;
        }
        if let Some(ua) = &self.config.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        for (name, value) in &request.headers {
            list.append(&header_line(name, value))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let mut head = parse_response_head(&lines);
        head.status = easy.response_code()?;
        Ok(head)
    }
}

/// libcurl takes whole milliseconds and reads 0 as "no timeout"; round up.
fn curl_timeout(timeout: Duration) -> Duration {
    timeout.max(Duration::from_millis(1))
}

/// libcurl drops `Name:` headers; `Name;` sends the header with an empty value.
fn header_line(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{};", name.trim())
    } else {
        format!("{}: {}", name.trim(), value.trim())
    }
}
