//! Tests for the declared endpoint schemas.

use timezonedb::registry::{ValueConstraint, lookup_endpoint};
use timezonedb::{Endpoint, TimezoneDbError};

fn names(endpoint: &str) -> Vec<&'static str> {
    lookup_endpoint(endpoint).unwrap().param_names().collect()
}

#[test]
fn exactly_three_endpoints_declared() {
    for name in ["list-time-zone", "get-time-zone", "convert-time-zone"] {
        assert!(lookup_endpoint(name).is_ok(), "{name} should be declared");
    }
    assert_eq!(Endpoint::ALL.len(), 3);
    assert!(matches!(
        lookup_endpoint("list-time-zones"),
        Err(TimezoneDbError::UnknownEndpoint(_))
    ));
}

#[test]
fn declaration_order_is_preserved() {
    assert_eq!(
        names("list-time-zone"),
        ["key", "format", "callback", "fields", "country", "zone"]
    );
    assert_eq!(
        names("get-time-zone"),
        [
            "key", "format", "callback", "fields", "by", "zone", "lat", "lng", "country",
            "region", "city", "ip", "page", "time"
        ]
    );
    assert_eq!(
        names("convert-time-zone"),
        ["key", "format", "callback", "fields", "from", "to", "time"]
    );
}

#[test]
fn required_parameters_per_endpoint() {
    let required = |endpoint: &str| -> Vec<&'static str> {
        lookup_endpoint(endpoint)
            .unwrap()
            .params
            .iter()
            .filter(|r| r.required)
            .map(|r| r.name)
            .collect()
    };
    assert_eq!(required("list-time-zone"), ["key"]);
    assert_eq!(required("get-time-zone"), ["key", "by"]);
    assert_eq!(required("convert-time-zone"), ["key", "from", "to"]);
}

#[test]
fn format_options_shared_by_all_endpoints() {
    for endpoint in Endpoint::ALL {
        let rule = endpoint.schema().rule("format").unwrap();
        assert_eq!(
            rule.constraint,
            Some(ValueConstraint::OneOf {
                options: &["xml", "json"],
                default: Some("xml"),
            })
        );
        assert_eq!(endpoint.schema().default_format(), Some("xml"));
    }
}

#[test]
fn by_options_and_conditions() {
    let schema = Endpoint::GetTimeZone.schema();
    assert_eq!(
        schema.rule("by").unwrap().constraint,
        Some(ValueConstraint::OneOf {
            options: &["zone", "position", "city", "ip"],
            default: None,
        })
    );
    assert_eq!(schema.default_value("by"), None);

    let trigger = |param: &str| {
        let condition = schema.rule(param).unwrap().condition.unwrap();
        assert_eq!(condition.controlling, "by");
        condition.triggers
    };
    assert_eq!(trigger("zone"), ["zone"]);
    assert_eq!(trigger("lat"), ["position"]);
    assert_eq!(trigger("lng"), ["position"]);
    assert_eq!(trigger("country"), ["city"]);
    assert_eq!(trigger("city"), ["city"]);
    assert_eq!(trigger("ip"), ["ip"]);
    assert!(schema.rule("region").unwrap().condition.is_none());
}

#[test]
fn list_default_fields_omit_dst() {
    let schema = Endpoint::ListTimeZone.schema();
    let default = schema.default_fields().unwrap();
    assert_eq!(default, "countryCode,countryName,zoneName,gmtOffset,timestamp");

    let Some(ValueConstraint::FieldList { allowed, .. }) = schema.rule("fields").unwrap().constraint
    else {
        panic!("fields should be a field list");
    };
    assert!(allowed.contains(&"dst"));
}

#[test]
fn get_and_convert_defaults_cover_all_fields() {
    for endpoint in [Endpoint::GetTimeZone, Endpoint::ConvertTimeZone] {
        let schema = endpoint.schema();
        let Some(ValueConstraint::FieldList { allowed, default }) =
            schema.rule("fields").unwrap().constraint
        else {
            panic!("fields should be a field list");
        };
        assert_eq!(default.split(',').collect::<Vec<_>>(), allowed);
    }
}
