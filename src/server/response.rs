//! Response encoding: the JSON envelope, the docs page, and status reasons.

use may_minihttp::Response;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write a JSON body with the permissive cross-origin header attached.
pub fn write_json<T: Serialize>(res: &mut Response, status: u16, body: &T) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.header("Access-Control-Allow-Origin: *");
    match serde_json::to_vec(body) {
        Ok(bytes) => res.body_vec(bytes),
        // Serialize on our payload types cannot fail; keep the envelope shape anyway.
        Err(_) => res.body_vec(br#"{"success":false,"error":"Internal server error"}"#.to_vec()),
    }
}

/// Write a classified error as the uniform `{success:false, error}` envelope.
pub fn write_error(res: &mut Response, err: &ApiError) {
    write_json(
        res,
        err.status(),
        &json!({ "success": false, "error": err.to_string() }),
    );
}

/// Write a static HTML body (the documentation root route).
pub fn write_html(res: &mut Response, status: u16, html: &'static str) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: text/html");
    res.body_vec(html.as_bytes().to_vec());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(400), "Bad Request");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(500), "Internal Server Error");
    }
}
