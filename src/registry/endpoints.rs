//! Declared schemas for the three API endpoints.

use super::{Endpoint, EndpointSchema, ParameterRule};

const FORMATS: &[&str] = &["xml", "json"];

pub(super) static LIST_TIME_ZONE: EndpointSchema = EndpointSchema {
    endpoint: Endpoint::ListTimeZone,
    params: &[
        ParameterRule::required("key"),
        ParameterRule::optional("format").one_of_or(FORMATS, "xml"),
        ParameterRule::optional("callback"),
        // the default list leaves out `dst` even though it is allowed
        ParameterRule::optional("fields").field_list(
            &[
                "countryCode",
                "countryName",
                "zoneName",
                "gmtOffset",
                "dst",
                "timestamp",
            ],
            "countryCode,countryName,zoneName,gmtOffset,timestamp",
        ),
        ParameterRule::optional("country"),
        ParameterRule::optional("zone"),
    ],
};

pub(super) static GET_TIME_ZONE: EndpointSchema = EndpointSchema {
    endpoint: Endpoint::GetTimeZone,
    params: &[
        ParameterRule::required("key"),
        ParameterRule::optional("format").one_of_or(FORMATS, "xml"),
        ParameterRule::optional("callback"),
        ParameterRule::optional("fields").field_list(
            &[
                "countryCode",
                "countryName",
                "regionName",
                "cityName",
                "zoneName",
                "abbreviation",
                "gmtOffset",
                "dst",
                "zoneStart",
                "zoneEnd",
                "nextAbbreviation",
                "timestamp",
                "formatted",
            ],
            "countryCode,countryName,regionName,cityName,zoneName,abbreviation,gmtOffset,dst,zoneStart,zoneEnd,nextAbbreviation,timestamp,formatted",
        ),
        ParameterRule::required("by").one_of(&["zone", "position", "city", "ip"]),
        ParameterRule::optional("zone").required_when("by", &["zone"]),
        ParameterRule::optional("lat").required_when("by", &["position"]),
        ParameterRule::optional("lng").required_when("by", &["position"]),
        ParameterRule::optional("country").required_when("by", &["city"]),
        ParameterRule::optional("region"),
        ParameterRule::optional("city").required_when("by", &["city"]),
        ParameterRule::optional("ip").required_when("by", &["ip"]),
        ParameterRule::optional("page"),
        ParameterRule::optional("time"),
    ],
};

pub(super) static CONVERT_TIME_ZONE: EndpointSchema = EndpointSchema {
    endpoint: Endpoint::ConvertTimeZone,
    params: &[
        ParameterRule::required("key"),
        ParameterRule::optional("format").one_of_or(FORMATS, "xml"),
        ParameterRule::optional("callback"),
        ParameterRule::optional("fields").field_list(
            &[
                "fromZoneName",
                "fromAbbreviation",
                "fromTimestamp",
                "toZoneName",
                "toAbbreviation",
                "toTimestamp",
                "toFormatted",
                "offset",
            ],
            "fromZoneName,fromAbbreviation,fromTimestamp,toZoneName,toAbbreviation,toTimestamp,toFormatted,offset",
        ),
        ParameterRule::required("from"),
        ParameterRule::required("to"),
        ParameterRule::optional("time"),
    ],
};
