pub mod config;
pub mod logging;

pub mod file_attrs;
pub mod probe;
pub mod query;
pub mod thumbnail;
pub mod url_equiv;

pub use probe::{remote_size, supports_range_requests, RemoteProbe, UNKNOWN_SIZE};
pub use url_equiv::{is_equivalent, UrlExt};
