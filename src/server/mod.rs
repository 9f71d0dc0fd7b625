//! HTTP boundary: request parsing, response encoding, the service itself and
//! the `may_minihttp` server wrapper.

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_query_params, parse_request, ParsedRequest};
pub use service::AppService;
