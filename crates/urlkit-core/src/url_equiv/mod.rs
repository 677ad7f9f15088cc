//! URL equivalence under a looser policy than exact equality.
//!
//! Two URLs are equivalent when they agree on scheme (any case), host (after
//! `www.` normalization, only when both have one), path (any case, ignoring
//! leading/trailing slashes), explicit port, and query (any case).

mod normalize;

use std::collections::HashMap;
use url::Url;

use normalize::{fold_query, normalize_path, www_host};

/// Returns true if `a` and `b` denote the same resource.
///
/// The host check runs only when both URLs carry a host; a URL without a host
/// never fails on host grounds alone.
pub fn is_equivalent(a: &Url, b: &Url) -> bool {
    if a == b {
        return true;
    }
    if !a.scheme().eq_ignore_ascii_case(b.scheme()) {
        return false;
    }
    if let (Some(ha), Some(hb)) = (a.host_str(), b.host_str()) {
        if www_host(ha) != www_host(hb) {
            return false;
        }
    }
    if normalize_path(a.path()) != normalize_path(b.path()) {
        return false;
    }
    if a.port() != b.port() {
        return false;
    }
    fold_query(a.query()) == fold_query(b.query())
}

/// Convenience methods on [`Url`].
pub trait UrlExt {
    /// See [`is_equivalent`].
    fn is_equivalent(&self, other: &Url) -> bool;

    /// See [`crate::query::query_parameters`].
    fn query_parameters(&self) -> Option<HashMap<String, String>>;
}

impl UrlExt for Url {
    fn is_equivalent(&self, other: &Url) -> bool {
        is_equivalent(self, other)
    }

    fn query_parameters(&self) -> Option<HashMap<String, String>> {
        crate::query::query_parameters(self)
    }
}
