//! Remote resource probing over HTTP HEAD.
//!
//! Two single-shot probes: the declared size of a resource, and whether the
//! server honours byte-range requests. Every failure (DNS, refused
//! connection, timeout, malformed response) collapses into [`UNKNOWN_SIZE`]
//! or `false`; the `try_*` methods expose the underlying [`ProbeError`] for
//! callers that want to tell "server sent no length" apart from "request
//! failed".
//!
//! The transport is blocking and always runs on a background thread, and
//! results are delivered there too. Callers must still not await a probe from
//! a thread that has to stay responsive: a probe can take up to its timeout.

mod error;
mod parse;
mod request;
mod transport;

pub use error::ProbeError;
pub use parse::ResponseHead;
pub use request::{HeadRequest, RANGE_PROBE};
pub use transport::{CurlTransport, HeadTransport};

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use url::Url;

use crate::config::{ProbeConfig, DEFAULT_PROBE_TIMEOUT_SECS};

/// Size reported when the server gives no usable `Content-Length` or the probe fails.
pub const UNKNOWN_SIZE: i64 = -1;

/// HTTP 206 Partial Content.
const PARTIAL_CONTENT: u32 = 206;

const PROBE_THREAD_NAME: &str = "urlkit-probe";

/// Declared size of `url` via libcurl, or [`UNKNOWN_SIZE`].
pub async fn remote_size(url: &Url, timeout: Duration) -> i64 {
    RemoteProbe::new().timeout(timeout).remote_size(url).await
}

/// Whether `url`'s server answers a ranged HEAD with 206, via libcurl.
pub async fn supports_range_requests(url: &Url, timeout: Duration) -> bool {
    RemoteProbe::new()
        .timeout(timeout)
        .supports_range_requests(url)
        .await
}

/// Issues HEAD probes through a [`HeadTransport`].
///
/// Cloning is cheap; clones share the transport. Calls are independent:
/// no caching, coalescing, retry or cancellation.
#[derive(Debug)]
pub struct RemoteProbe<T = CurlTransport> {
    transport: Arc<T>,
    timeout: Duration,
}

impl<T> Clone for RemoteProbe<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            timeout: self.timeout,
        }
    }
}

impl RemoteProbe<CurlTransport> {
    /// libcurl transport with default settings and a 30 second timeout.
    pub fn new() -> Self {
        Self::from_config(&ProbeConfig::default())
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            transport: Arc::new(CurlTransport::new(config.clone())),
            timeout: config.timeout(),
        }
    }
}

impl Default for RemoteProbe<CurlTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HeadTransport> RemoteProbe<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }

    /// Per-request timeout. Elapsing resolves the probe as a failure.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Plain cache-bypassing HEAD, returning the parsed final response.
    pub async fn head(&self, url: &Url) -> Result<ResponseHead, ProbeError> {
        self.execute(HeadRequest::plain(url, self.timeout)).await
    }

    /// Declared `Content-Length`, `None` if the server sent none.
    pub async fn try_remote_size(&self, url: &Url) -> Result<Option<u64>, ProbeError> {
        let head = self
            .execute(HeadRequest::size_probe(url, self.timeout))
            .await?;
        Ok(head.content_length)
    }

    /// Declared size in bytes, or [`UNKNOWN_SIZE`] for a missing header or any failure.
    pub async fn remote_size(&self, url: &Url) -> i64 {
        size_or_unknown(url, self.try_remote_size(url).await)
    }

    pub async fn try_supports_range_requests(&self, url: &Url) -> Result<bool, ProbeError> {
        let head = self
            .execute(HeadRequest::range_probe(url, self.timeout))
            .await?;
        Ok(head.status == PARTIAL_CONTENT)
    }

    /// True iff the ranged HEAD comes back 206. Any other status or failure is false.
    pub async fn supports_range_requests(&self, url: &Url) -> bool {
        range_or_false(url, self.try_supports_range_requests(url).await)
    }

    /// Callback form of [`Self::remote_size`]. `on_done` runs on a probe
    /// thread, never on the caller's. Errors only if that thread can't be spawned.
    pub fn remote_size_then<F>(&self, url: &Url, on_done: F) -> io::Result<()>
    where
        F: FnOnce(i64) + Send + 'static,
    {
        let request = HeadRequest::size_probe(url, self.timeout);
        let url = url.clone();
        self.spawn_detached(request, move |result| {
            on_done(size_or_unknown(&url, result.map(|h| h.content_length)))
        })
    }

    /// Callback form of [`Self::supports_range_requests`]; same threading as
    /// [`Self::remote_size_then`].
    pub fn supports_range_requests_then<F>(&self, url: &Url, on_done: F) -> io::Result<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let request = HeadRequest::range_probe(url, self.timeout);
        let url = url.clone();
        self.spawn_detached(request, move |result| {
            on_done(range_or_false(
                &url,
                result.map(|h| h.status == PARTIAL_CONTENT),
            ))
        })
    }

    async fn execute(&self, request: HeadRequest) -> Result<ResponseHead, ProbeError> {
        tracing::debug!(url = %request.url, headers = ?request.headers, "HEAD probe");
        let transport = Arc::clone(&self.transport);
        tokio::task::spawn_blocking(move || transport.head(&request)).await?
    }

    fn spawn_detached<F>(&self, request: HeadRequest, finish: F) -> io::Result<()>
    where
        F: FnOnce(Result<ResponseHead, ProbeError>) + Send + 'static,
    {
        tracing::debug!(url = %request.url, headers = ?request.headers, "HEAD probe (detached)");
        let transport = Arc::clone(&self.transport);
        thread::Builder::new()
            .name(PROBE_THREAD_NAME.to_string())
            .spawn(move || finish(transport.head(&request)))
            .map(drop)
    }
}

fn size_or_unknown(url: &Url, result: Result<Option<u64>, ProbeError>) -> i64 {
    match result {
        Ok(Some(len)) => i64::try_from(len).unwrap_or_else(|_| {
            tracing::debug!(%url, len, "Content-Length out of range; size unknown");
            UNKNOWN_SIZE
        }),
        Ok(None) => {
            tracing::debug!(%url, "no Content-Length; size unknown");
            UNKNOWN_SIZE
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "size probe failed; size unknown");
            UNKNOWN_SIZE
        }
    }
}

fn range_or_false(url: &Url, result: Result<bool, ProbeError>) -> bool {
    result.unwrap_or_else(|e| {
        tracing::warn!(%url, error = %e, "range probe failed; assuming no range support");
        false
    })
}
