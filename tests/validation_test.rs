//! Tests for schema-driven parameter validation.

use timezonedb::validator::validate;
use timezonedb::{RequestParameters, TimezoneDbError};

fn params(pairs: &[(&str, &str)]) -> RequestParameters {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Some(v.to_string())))
        .collect()
}

// =============================================================================
// Minimal parameter sets
// =============================================================================

#[test]
fn minimal_sets_pass_for_every_endpoint() {
    validate("list-time-zone", &params(&[("key", "K")])).unwrap();
    validate("get-time-zone", &params(&[("key", "K"), ("by", "zone"), ("zone", "UTC")])).unwrap();
    validate(
        "convert-time-zone",
        &params(&[("key", "K"), ("from", "UTC"), ("to", "CET")]),
    )
    .unwrap();
}

#[test]
fn every_lookup_method_passes_with_its_parameters() {
    let cases: &[&[(&str, &str)]] = &[
        &[("by", "zone"), ("zone", "America/Chicago")],
        &[("by", "position"), ("lat", "40.689247"), ("lng", "-74.044502")],
        &[("by", "city"), ("country", "US"), ("city", "Chicago")],
        &[("by", "ip"), ("ip", "8.8.8.8")],
    ];
    for case in cases {
        let mut p = params(case);
        p.set("key", Some("K".into()));
        validate("get-time-zone", &p).unwrap_or_else(|e| panic!("{case:?}: {e}"));
    }
}

#[test]
fn unknown_endpoint() {
    let err = validate("nope", &params(&[("key", "K")])).unwrap_err();
    assert!(matches!(err, TimezoneDbError::UnknownEndpoint(ref n) if n == "nope"));
}

// =============================================================================
// Failure classification
// =============================================================================

#[test]
fn missing_key() {
    let err = validate("list-time-zone", &params(&[])).unwrap_err();
    assert!(matches!(err, TimezoneDbError::MissingRequired { ref param } if param == "key"));
}

#[test]
fn empty_required_counts_as_missing() {
    let err = validate(
        "convert-time-zone",
        &params(&[("key", "K"), ("from", ""), ("to", "CET")]),
    )
    .unwrap_err();
    assert!(matches!(err, TimezoneDbError::MissingRequired { ref param } if param == "from"));
}

#[test]
fn position_reports_lat_first() {
    let err = validate("get-time-zone", &params(&[("key", "K"), ("by", "position")])).unwrap_err();
    match err {
        TimezoneDbError::ConditionalMissing {
            param,
            controlling,
            trigger,
        } => {
            assert_eq!(param, "lat");
            assert_eq!(controlling, "by");
            assert_eq!(trigger, "position");
        }
        other => panic!("expected ConditionalMissing, got {other:?}"),
    }
}

#[test]
fn position_reports_lng_when_lat_present() {
    let err = validate(
        "get-time-zone",
        &params(&[("key", "K"), ("by", "position"), ("lat", "1.0")]),
    )
    .unwrap_err();
    assert_eq!(err.param(), Some("lng"));
}

#[test]
fn empty_conditional_is_conditional_missing() {
    let err = validate(
        "get-time-zone",
        &params(&[("key", "K"), ("by", "zone"), ("zone", "")]),
    )
    .unwrap_err();
    assert!(
        matches!(err, TimezoneDbError::ConditionalMissing { ref param, .. } if param == "zone"),
        "got {err:?}"
    );
}

#[test]
fn city_lookup_reports_country_before_city() {
    let err = validate("get-time-zone", &params(&[("key", "K"), ("by", "city")])).unwrap_err();
    assert_eq!(err.param(), Some("country"));
}

#[test]
fn ip_lookup_reports_missing_ip() {
    let err = validate("get-time-zone", &params(&[("key", "K"), ("by", "ip")])).unwrap_err();
    match err {
        TimezoneDbError::ConditionalMissing {
            param,
            controlling,
            trigger,
        } => {
            assert_eq!(param, "ip");
            assert_eq!(controlling, "by");
            assert_eq!(trigger, "ip");
        }
        other => panic!("expected ConditionalMissing, got {other:?}"),
    }
}

#[test]
fn city_lookup_reports_city_when_country_present() {
    let err = validate(
        "get-time-zone",
        &params(&[("key", "K"), ("by", "city"), ("country", "US")]),
    )
    .unwrap_err();
    match err {
        TimezoneDbError::ConditionalMissing {
            param,
            controlling,
            trigger,
        } => {
            assert_eq!(param, "city");
            assert_eq!(controlling, "by");
            assert_eq!(trigger, "city");
        }
        other => panic!("expected ConditionalMissing, got {other:?}"),
    }
}

#[test]
fn conditional_params_allowed_for_other_methods() {
    // `zone` is optional when looking up by ip
    validate(
        "get-time-zone",
        &params(&[("key", "K"), ("by", "ip"), ("ip", "1.1.1.1"), ("zone", "UTC")]),
    )
    .unwrap();
}

#[test]
fn invalid_by_option() {
    let err = validate("get-time-zone", &params(&[("key", "K"), ("by", "postcode")])).unwrap_err();
    assert!(matches!(err, TimezoneDbError::InvalidOption { ref param, ref value, .. }
        if param == "by" && value == "postcode"));
}

#[test]
fn invalid_format_for_every_endpoint() {
    let cases = [
        ("list-time-zone", params(&[("key", "K"), ("format", "csv")])),
        (
            "get-time-zone",
            params(&[("key", "K"), ("format", "csv"), ("by", "ip"), ("ip", "1.1.1.1")]),
        ),
        (
            "convert-time-zone",
            params(&[("key", "K"), ("format", "csv"), ("from", "UTC"), ("to", "CET")]),
        ),
    ];
    for (endpoint, p) in cases {
        let err = validate(endpoint, &p).unwrap_err();
        assert!(
            matches!(err, TimezoneDbError::InvalidOption { ref param, .. } if param == "format"),
            "{endpoint}: {err:?}"
        );
    }
}

#[test]
fn options_are_case_sensitive() {
    let err = validate("list-time-zone", &params(&[("key", "K"), ("format", "JSON")])).unwrap_err();
    assert!(matches!(err, TimezoneDbError::InvalidOption { .. }));
}

#[test]
fn invalid_field_names_offending_token() {
    let err = validate(
        "list-time-zone",
        &params(&[("key", "K"), ("fields", "countryCode,bogus")]),
    )
    .unwrap_err();
    match err {
        TimezoneDbError::InvalidField { param, field, .. } => {
            assert_eq!(param, "fields");
            assert_eq!(field, "bogus");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn fields_are_per_endpoint() {
    // `cityName` exists for get-time-zone but not for list-time-zone
    let err = validate("list-time-zone", &params(&[("key", "K"), ("fields", "cityName")]))
        .unwrap_err();
    assert!(matches!(err, TimezoneDbError::InvalidField { .. }));

    validate(
        "get-time-zone",
        &params(&[("key", "K"), ("by", "ip"), ("ip", "1.1.1.1"), ("fields", "cityName,dst")]),
    )
    .unwrap();
}

#[test]
fn undeclared_params_pass_through() {
    let clean = validate("list-time-zone", &params(&[("key", "K"), ("extra", "1")])).unwrap();
    assert_eq!(clean.get("extra"), Some("1"));
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn output_is_normalized_map() {
    let mut p = params(&[("key", "K"), ("format", "json")]);
    p.set("callback", None);
    p.set("zone", Some(String::new()));

    let clean = validate("list-time-zone", &p).unwrap();
    let pairs: Vec<_> = clean.iter().collect();
    assert_eq!(pairs, [("format", "json"), ("key", "K")]);
}

#[test]
fn validation_is_idempotent() {
    let p = params(&[
        ("key", "K"),
        ("format", "json"),
        ("by", "position"),
        ("lat", "59.91"),
        ("lng", "10.75"),
        ("fields", "zoneName,gmtOffset"),
    ]);
    let first = validate("get-time-zone", &p).unwrap();
    let second = validate("get-time-zone", &first.clone().into()).unwrap();
    assert_eq!(first, second);
}
