//! Request dispatch: a validated request to a response payload.
//!
//! The dispatcher resolves the requested type against the catalog, builds a
//! fresh locale-bound [`Registry`], invokes the producer exactly `count` times
//! and assembles the envelope payload. Producer panics are isolated with
//! `catch_unwind` so a misbehaving producer can never emit a partial or
//! corrupt payload; the caller gets a classified internal error instead.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::catalog::DataType;
use crate::error::ApiError;
use crate::registry::Registry;
use crate::validator::GenerationRequest;

/// Success payload for `/api/generate`.
///
/// `data` is the bare generated item when `count == 1` and an ordered array
/// of exactly `count` items otherwise. `type` echoes the validated request
/// type.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub count: usize,
    pub data: Value,
}

/// Execute a validated request.
///
/// # Errors
///
/// `UnknownType` when the requested type is not in the catalog, `Internal`
/// when a producer fails unexpectedly.
pub fn dispatch(request: &GenerationRequest) -> Result<GenerateResponse, ApiError> {
    let kind = DataType::from_name(&request.type_name)
        .ok_or_else(|| ApiError::UnknownType(request.type_name.clone()))?;
    let registry = Registry::new(request.locale);
    let count = request.count;

    debug!(data_type = %kind, count, locale = registry.locale().as_str(), "dispatching generation");

    let items = catch_unwind(AssertUnwindSafe(|| {
        (0..count).map(|_| registry.produce(kind)).collect::<Vec<Value>>()
    }))
    .map_err(|panic| {
        error!(data_type = %kind, count, ?panic, "producer failed");
        ApiError::Internal
    })?;

    let data = if count == 1 {
        items.into_iter().next().unwrap_or(Value::Null)
    } else {
        Value::Array(items)
    };

    Ok(GenerateResponse {
        success: true,
        type_name: kind.as_str(),
        count,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn request(type_name: &str, count: usize) -> GenerationRequest {
        GenerationRequest {
            type_name: type_name.to_string(),
            count,
            locale: Locale::EnUs,
        }
    }

    #[test]
    fn test_single_item_is_bare() {
        let resp = dispatch(&request("name", 1)).expect("name generates");
        assert!(resp.success);
        assert_eq!(resp.type_name, "name");
        assert_eq!(resp.count, 1);
        assert!(resp.data.is_string(), "count=1 must not be wrapped");
    }

    #[test]
    fn test_multiple_items_are_an_ordered_array() {
        let resp = dispatch(&request("email", 5)).expect("email generates");
        assert_eq!(resp.count, 5);
        let items = resp.data.as_array().expect("count>1 yields an array");
        assert_eq!(items.len(), 5);
        for item in items {
            assert!(item.is_string());
        }
    }

    #[test]
    fn test_count_ceiling_yields_full_array() {
        let resp = dispatch(&request("word", 100)).expect("word generates");
        assert_eq!(resp.count, 100);
        assert_eq!(resp.data.as_array().map(Vec::len), Some(100));
    }

    #[test]
    fn test_unknown_type_is_classified() {
        let err = dispatch(&request("not_a_real_type", 1)).expect_err("must fail");
        assert_eq!(err, ApiError::UnknownType("not_a_real_type".to_string()));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_every_listed_type_dispatches() {
        for kind in DataType::ALL {
            let resp = dispatch(&request(kind.as_str(), 2)).expect("catalog type generates");
            assert_eq!(resp.data.as_array().map(Vec::len), Some(2), "{kind}");
        }
    }

    #[test]
    fn test_composite_dispatch() {
        let resp = dispatch(&request("user", 3)).expect("user generates");
        for item in resp.data.as_array().expect("array") {
            assert!(item.get("id").is_some());
            assert!(item.get("created_at").is_some());
        }
    }
}
