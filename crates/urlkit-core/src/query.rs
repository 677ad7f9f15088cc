//! Query string as a name → value map.

use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use url::Url;

/// Returns the URL's query items, percent-decoded.
///
/// `None` when the URL has no query at all. Items are applied in order: a
/// repeated name keeps its last value, and an item without `=` has no value,
/// so it removes any earlier entry for that name. `+` is not a space here.
pub fn query_parameters(url: &Url) -> Option<HashMap<String, String>> {
    let query = url.query()?;
    let mut params = HashMap::new();
    for item in query.split('&') {
        match item.split_once('=') {
            Some((name, value)) => {
                params.insert(decode(name), decode(value));
            }
            None => {
                params.remove(&decode(item));
            }
        }
    }
    Some(params)
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
