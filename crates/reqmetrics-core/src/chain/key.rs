//! Endpoint identity: `METHOD_path`, query string removed.

/// Path with everything from the first `?` removed.
pub fn strip_query(path: &str) -> &str {
    match path.split_once('?') {
        Some((p, _)) => p,
        None => path,
    }
}

/// Build the aggregation key for a request.
///
/// `endpoint_key("GET", "/items?sort=asc") == "GET_/items"`.
pub fn endpoint_key(method: &str, path: &str) -> String {
    let path = strip_query(path);
    let mut key = String::with_capacity(method.len() + 1 + path.len());
    key.push_str(method);
    key.push('_');
    key.push_str(path);
    key
}
