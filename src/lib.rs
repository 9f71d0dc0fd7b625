//! # fake-data-api
//!
//! A small, coroutine-powered HTTP service that generates synthetic ("fake")
//! data records on demand for testing and development workflows. Clients ask
//! for a named data type, an item count and a locale; the service answers
//! with generated values wrapped in a uniform JSON envelope.
//!
//! ## Architecture
//!
//! - **[`catalog`]** - the closed set of generatable types as an enum, so
//!   lookup is an exhaustive compile-time match rather than a runtime map
//! - **[`locale`]** - locale tag parsing with fallback onto the `fake`
//!   backend's bundled locales
//! - **[`registry`]** - locale-scoped generator registry; built fresh per
//!   request, producers delegate to the `fake` crate
//! - **[`validator`]** - query parameters to a validated request, or a
//!   classified error
//! - **[`dispatcher`]** - executes a validated request: catalog lookup, N
//!   producer invocations, envelope assembly, panic isolation
//! - **[`error`]** - classified errors and their HTTP status mapping
//! - **[`server`]** - the `may_minihttp` boundary: request parsing, response
//!   encoding, the route table, server lifecycle
//! - **[`cli`]** / **[`runtime_config`]** - binding address flags and the
//!   coroutine stack-size knob
//!
//! ## Request flow
//!
//! ```text
//! connection (may coroutine)
//!   └─ parse_request            method, path, query params
//!       └─ validator::validate  type/count/locale or 400
//!           └─ dispatcher::dispatch
//!               ├─ catalog lookup        unknown type -> 400
//!               ├─ Registry::new(locale) fresh per request
//!               └─ produce() x count     panic -> 500
//!                   └─ write_json        {success, type, count, data}
//! ```
//!
//! Each connection is handled by its own `may` coroutine. Workers share only
//! the immutable catalog; every request builds its own locale-bound registry,
//! so the core needs no locks.
//!
//! ## Quick start
//!
//! ```no_run
//! use fake_data_api::server::{AppService, HttpServer};
//!
//! let handle = HttpServer(AppService::new())
//!     .start("0.0.0.0:8000")
//!     .expect("failed to bind");
//! handle.join().expect("server panicked");
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |---|---|
//! | `GET /api/generate?type=&count=&locale=` | generate data |
//! | `GET /api/types` | list the catalog |
//! | `GET /api/health` | health check |
//! | `GET /` | HTML documentation |

pub mod catalog;
pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod locale;
pub mod registry;
pub mod runtime_config;
pub mod server;
pub mod validator;

pub use catalog::DataType;
pub use error::ApiError;
pub use locale::Locale;
pub use registry::Registry;
pub use validator::GenerationRequest;
