//! Extraction of the pieces of a raw HTTP request the service cares about.

use std::collections::HashMap;

use may_minihttp::Request;
use tracing::debug;

/// Parsed HTTP request data used by [`AppService`](super::AppService).
///
/// The API is GET-only with key/value query parameters, so this is all the
/// transport needs to hand over: no bodies, no cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request path with the query string stripped
    pub path: String,
    /// Decoded query string parameters
    pub query_params: HashMap<String, String>,
}

/// Parse query string parameters from a URL path.
///
/// Extracts everything after the `?` character and URL-decodes parameter
/// names and values. Duplicate keys keep the last value.
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    if let Some(pos) = path.find('?') {
        let query_str = &path[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}

/// Extract method, path and query parameters from a `may_minihttp::Request`.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();
    let query_params = parse_query_params(&raw_path);

    debug!(
        method = %method,
        path = %path,
        param_count = query_params.len(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        query_params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params() {
        let q = parse_query_params("/api/generate?type=email&count=5");
        assert_eq!(q.get("type"), Some(&"email".to_string()));
        assert_eq!(q.get("count"), Some(&"5".to_string()));
    }

    #[test]
    fn test_parse_query_params_decodes() {
        let q = parse_query_params("/p?locale=fr%5FFR&x=a%20b");
        assert_eq!(q.get("locale"), Some(&"fr_FR".to_string()));
        assert_eq!(q.get("x"), Some(&"a b".to_string()));
    }

    #[test]
    fn test_no_query_string() {
        assert!(parse_query_params("/api/types").is_empty());
        assert!(parse_query_params("/api/generate?").is_empty());
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let q = parse_query_params("/p?count=1&count=7");
        assert_eq!(q.get("count"), Some(&"7".to_string()));
    }
}
