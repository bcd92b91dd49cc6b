//! Schema registry: the declared parameter rules of every endpoint.
//!
//! Schemas are static data compiled into the crate and shared read-only.
//! Each [`EndpointSchema`] lists its parameters in declaration order, which
//! is also the order the validator checks them in.

mod endpoints;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, TimezoneDbError};

/// The remote operations exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    ListTimeZone,
    GetTimeZone,
    ConvertTimeZone,
}

impl Endpoint {
    /// All declared endpoints.
    pub const ALL: [Endpoint; 3] = [
        Endpoint::ListTimeZone,
        Endpoint::GetTimeZone,
        Endpoint::ConvertTimeZone,
    ];

    /// Path segment used in the request URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListTimeZone => "list-time-zone",
            Self::GetTimeZone => "get-time-zone",
            Self::ConvertTimeZone => "convert-time-zone",
        }
    }

    /// The schema declared for this endpoint.
    pub fn schema(&self) -> &'static EndpointSchema {
        match self {
            Self::ListTimeZone => &endpoints::LIST_TIME_ZONE,
            Self::GetTimeZone => &endpoints::GET_TIME_ZONE,
            Self::ConvertTimeZone => &endpoints::CONVERT_TIME_ZONE,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = TimezoneDbError;

    fn from_str(s: &str) -> Result<Self> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| TimezoneDbError::UnknownEndpoint(s.to_string()))
    }
}

/// Look up the schema for an endpoint by its path name.
///
/// Fails with [`TimezoneDbError::UnknownEndpoint`] for undeclared names.
pub fn lookup_endpoint(name: &str) -> Result<&'static EndpointSchema> {
    name.parse::<Endpoint>().map(|e| e.schema())
}

/// Declared parameter set of one endpoint.
#[derive(Debug)]
pub struct EndpointSchema {
    pub endpoint: Endpoint,
    /// Parameter rules in declaration order.
    pub params: &'static [ParameterRule],
}

impl EndpointSchema {
    /// Find the rule for a parameter name.
    pub fn rule(&self, name: &str) -> Option<&'static ParameterRule> {
        self.params.iter().find(|r| r.name == name)
    }

    /// Names of all declared parameters, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> {
        self.params.iter().map(|r| r.name)
    }

    /// Value the API assumes when `name` is omitted, if one is declared.
    pub fn default_value(&self, name: &str) -> Option<&'static str> {
        self.rule(name)?.constraint?.default()
    }

    /// Default response format (`xml` for every endpoint).
    pub fn default_format(&self) -> Option<&'static str> {
        self.default_value("format")
    }

    /// Default field list the API uses when `fields` is omitted.
    pub fn default_fields(&self) -> Option<&'static str> {
        self.default_value("fields")
    }
}

/// Rule attached to a single declared parameter.
#[derive(Debug)]
pub struct ParameterRule {
    pub name: &'static str,
    /// Always required, regardless of other parameters.
    pub required: bool,
    pub constraint: Option<ValueConstraint>,
    pub condition: Option<Condition>,
}

impl ParameterRule {
    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            constraint: None,
            condition: None,
        }
    }

    const fn required(name: &'static str) -> Self {
        Self {
            required: true,
            ..Self::optional(name)
        }
    }

    const fn one_of(mut self, options: &'static [&'static str]) -> Self {
        self.constraint = Some(ValueConstraint::OneOf {
            options,
            default: None,
        });
        self
    }

    const fn one_of_or(mut self, options: &'static [&'static str], default: &'static str) -> Self {
        self.constraint = Some(ValueConstraint::OneOf {
            options,
            default: Some(default),
        });
        self
    }

    const fn field_list(mut self, allowed: &'static [&'static str], default: &'static str) -> Self {
        self.constraint = Some(ValueConstraint::FieldList { allowed, default });
        self
    }

    const fn required_when(
        mut self,
        controlling: &'static str,
        triggers: &'static [&'static str],
    ) -> Self {
        self.condition = Some(Condition {
            controlling,
            triggers,
        });
        self
    }
}

/// Constraint on the value of a present parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConstraint {
    /// Value must equal one of the options exactly.
    OneOf {
        options: &'static [&'static str],
        default: Option<&'static str>,
    },
    /// Value is a comma-separated list; every token must be allowed.
    FieldList {
        allowed: &'static [&'static str],
        default: &'static str,
    },
}

impl ValueConstraint {
    /// Declared default, applied by the API rather than by this client.
    pub fn default(&self) -> Option<&'static str> {
        match *self {
            Self::OneOf { default, .. } => default,
            Self::FieldList { default, .. } => Some(default),
        }
    }
}

/// Makes a parameter required when `controlling` has one of `triggers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub controlling: &'static str,
    pub triggers: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_round_trips_through_name() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.as_str().parse::<Endpoint>().unwrap(), endpoint);
            assert_eq!(endpoint.schema().endpoint, endpoint);
        }
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let err = lookup_endpoint("delete-time-zone").unwrap_err();
        assert!(matches!(err, TimezoneDbError::UnknownEndpoint(ref n) if n == "delete-time-zone"));
    }

    #[test]
    fn endpoint_serializes_kebab_case() {
        let json = serde_json::to_string(&Endpoint::ConvertTimeZone).unwrap();
        assert_eq!(json, "\"convert-time-zone\"");
    }

    #[test]
    fn rule_builders_compose() {
        const RULE: ParameterRule = ParameterRule::optional("zone").required_when("by", &["zone"]);
        assert!(!RULE.required);
        assert!(RULE.constraint.is_none());
        assert_eq!(RULE.condition.unwrap().controlling, "by");
    }

    #[test]
    fn option_default_is_optional() {
        const FORMAT: ParameterRule = ParameterRule::optional("format").one_of_or(&["xml"], "xml");
        const BY: ParameterRule = ParameterRule::required("by").one_of(&["ip"]);
        assert_eq!(FORMAT.constraint.unwrap().default(), Some("xml"));
        assert_eq!(BY.constraint.unwrap().default(), None);
    }
}
