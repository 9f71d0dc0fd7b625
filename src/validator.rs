//! Request validation: raw query parameters to a [`GenerationRequest`].

use std::collections::HashMap;

use crate::error::ApiError;
use crate::locale::Locale;

/// Smallest accepted `count`.
pub const MIN_COUNT: i64 = 1;
/// Largest accepted `count`.
pub const MAX_COUNT: i64 = 100;

const DEFAULT_TYPE: &str = "name";
const DEFAULT_COUNT: &str = "1";
const DEFAULT_LOCALE: &str = "en_US";

/// A validated generation request. Immutable once built.
///
/// `type_name` is carried as the raw string on purpose: the validator only
/// owns syntactic and range constraints, and unknown types are left for the
/// dispatcher's catalog lookup to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested data type, not yet checked against the catalog.
    pub type_name: String,
    /// Number of items to generate, within `[1, 100]`.
    pub count: usize,
    /// Locale the registry will be built for.
    pub locale: Locale,
}

/// Validate the `type`/`count`/`locale` query parameters.
///
/// Missing parameters take their documented defaults (`name`, `1`, `en_US`).
///
/// # Errors
///
/// `InvalidParameter` when `count` is not an integer, `OutOfRange` when it is
/// an integer outside `[1, 100]`.
pub fn validate(params: &HashMap<String, String>) -> Result<GenerationRequest, ApiError> {
    let type_name = params
        .get("type")
        .cloned()
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let raw_count = params
        .get("count")
        .map(String::as_str)
        .unwrap_or(DEFAULT_COUNT);
    let count: i64 = raw_count.trim().parse().map_err(|_| {
        ApiError::InvalidParameter(format!("Count must be an integer, got '{raw_count}'"))
    })?;
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(ApiError::OutOfRange);
    }

    let locale = Locale::parse(
        params
            .get("locale")
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOCALE),
    );

    Ok(GenerationRequest {
        type_name,
        count: count as usize,
        locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let req = validate(&HashMap::new()).expect("defaults should validate");
        assert_eq!(req.type_name, "name");
        assert_eq!(req.count, 1);
        assert_eq!(req.locale, Locale::EnUs);
    }

    #[test]
    fn test_explicit_parameters() {
        let req = validate(&params(&[
            ("type", "email"),
            ("count", "5"),
            ("locale", "fr_FR"),
        ]))
        .expect("valid request");
        assert_eq!(req.type_name, "email");
        assert_eq!(req.count, 5);
        assert_eq!(req.locale, Locale::FrFr);
    }

    #[test]
    fn test_count_bounds_inclusive() {
        assert_eq!(validate(&params(&[("count", "1")])).map(|r| r.count), Ok(1));
        assert_eq!(
            validate(&params(&[("count", "100")])).map(|r| r.count),
            Ok(100)
        );
        assert_eq!(
            validate(&params(&[("count", "0")])),
            Err(ApiError::OutOfRange)
        );
        assert_eq!(
            validate(&params(&[("count", "101")])),
            Err(ApiError::OutOfRange)
        );
        assert_eq!(
            validate(&params(&[("count", "-3")])),
            Err(ApiError::OutOfRange)
        );
        assert_eq!(
            validate(&params(&[("count", "200")])),
            Err(ApiError::OutOfRange)
        );
    }

    #[test]
    fn test_non_integer_count_is_invalid_parameter() {
        for bad in ["abc", "1.5", "", "ten", "0x10"] {
            match validate(&params(&[("count", bad)])) {
                Err(ApiError::InvalidParameter(msg)) => {
                    assert!(msg.contains(bad) || bad.is_empty(), "message: {msg}");
                }
                other => panic!("count={bad:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_type_passes_validation() {
        // catalog membership is the dispatcher's concern
        let req = validate(&params(&[("type", "not_a_real_type")])).expect("syntax is fine");
        assert_eq!(req.type_name, "not_a_real_type");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let req = validate(&params(&[("locale", "xx_YY")])).expect("locale is unconstrained");
        assert_eq!(req.locale, Locale::EnUs);
    }
}
