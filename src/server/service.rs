//! The HTTP service: route table and per-route handlers.
//!
//! `may_minihttp` runs [`AppService::call`] on a coroutine per connection, so
//! any number of requests are served in parallel. The service itself carries
//! no mutable state; workers share only the immutable catalog, and each
//! generate request builds its own locale-bound registry inside the
//! dispatcher.

use std::collections::HashMap;
use std::io;

use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use tracing::{info, warn};

use super::request::parse_request;
use super::response::{write_error, write_html, write_json};
use crate::catalog::DataType;
use crate::error::ApiError;
use crate::{dispatcher, validator};

/// HTML documentation served at `/`, `/api` and `/api/`.
const DOCS_PAGE: &str = include_str!("../../static_site/index.html");

/// The fake data API service. Stateless; cloned per server worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppService;

impl AppService {
    pub fn new() -> Self {
        Self
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(req);
        match (parsed.method.as_str(), parsed.path.as_str()) {
            ("GET", "/api/generate") => generate_endpoint(res, &parsed.query_params),
            ("GET", "/api/types") => types_endpoint(res),
            ("GET", "/api/health") => health_endpoint(res),
            ("GET", "/" | "/api" | "/api/") => {
                write_html(res, 200, DOCS_PAGE);
                Ok(())
            }
            _ => {
                let err = ApiError::NotFound(parsed.path);
                warn!(method = %parsed.method, error = %err, "unmatched route");
                write_error(res, &err);
                Ok(())
            }
        }
    }
}

/// `/api/generate`: validate, dispatch, encode.
fn generate_endpoint(res: &mut Response, params: &HashMap<String, String>) -> io::Result<()> {
    match validator::validate(params).and_then(|req| dispatcher::dispatch(&req)) {
        Ok(payload) => {
            info!(
                data_type = payload.type_name,
                count = payload.count,
                "generated data"
            );
            write_json(res, 200, &payload);
        }
        Err(err) => {
            warn!(status = err.status(), error = %err, "generate request rejected");
            write_error(res, &err);
        }
    }
    Ok(())
}

/// `/api/types`: the full catalog in stable order.
fn types_endpoint(res: &mut Response) -> io::Result<()> {
    let types = DataType::names();
    write_json(
        res,
        200,
        &json!({
            "success": true,
            "count": types.len(),
            "types": types,
        }),
    );
    Ok(())
}

/// `/api/health`: liveness probe, independent of any request history.
fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_json(
        res,
        200,
        &json!({
            "success": true,
            "status": "healthy",
            "service": "fake-data-api",
        }),
    );
    Ok(())
}
