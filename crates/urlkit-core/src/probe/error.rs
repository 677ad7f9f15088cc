//! Probe error type. The default probe API collapses these into sentinels;
//! the `try_*` variants surface them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// libcurl failed: DNS, refused connection, timeout, malformed response, ...
    #[error("HEAD request failed: {0}")]
    Transport(#[from] curl::Error),
    /// A zero timeout leaves no time to send the request.
    #[error("probe timeout is zero")]
    ZeroTimeout,
    /// The background task running the transport panicked or was torn down.
    #[error("probe task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ProbeError {
    /// True when the failure was the configured timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        match self {
            ProbeError::Transport(e) => e.is_operation_timedout(),
            ProbeError::ZeroTimeout => true,
            ProbeError::Join(_) => false,
        }
    }
}
