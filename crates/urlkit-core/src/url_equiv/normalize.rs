//! Component normalization used by the equivalence check.

use std::borrow::Cow;

const WWW_PREFIX: &str = "www.";

/// Prefixes `www.` unless the host already starts with it. Case is preserved.
pub(super) fn www_host(host: &str) -> Cow<'_, str> {
    if host.starts_with(WWW_PREFIX) {
        Cow::Borrowed(host)
    } else {
        Cow::Owned(format!("{WWW_PREFIX}{host}"))
    }
}

/// Lowercases the path and trims `/` from both ends.
pub(super) fn normalize_path(path: &str) -> String {
    path.to_lowercase().trim_matches('/').to_string()
}

pub(super) fn fold_query(query: Option<&str>) -> Option<String> {
    query.map(str::to_lowercase)
}
