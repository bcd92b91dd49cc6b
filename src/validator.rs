//! Parameter validation against the endpoint schemas.
//!
//! Validation normalizes the submitted map (absent and empty values are
//! dropped), then walks the schema's parameters in declaration order and
//! stops at the first violation. Per parameter the checks run as: global
//! requiredness, enumerated options, field list, conditional requiredness.

use tracing::debug;

use crate::registry::{self, EndpointSchema, ValueConstraint};
use crate::types::{CleanParameters, RequestParameters};
use crate::{Result, TimezoneDbError};

/// Validate parameters for an endpoint given by name.
///
/// Returns the normalized map unchanged on success.
pub fn validate(endpoint: &str, params: &RequestParameters) -> Result<CleanParameters> {
    let schema = registry::lookup_endpoint(endpoint)?;
    validate_schema(schema, params)
}

/// Validate parameters against an already-resolved schema.
pub fn validate_schema(
    schema: &EndpointSchema,
    params: &RequestParameters,
) -> Result<CleanParameters> {
    let clean = params.normalize();
    match check(schema, &clean) {
        Ok(()) => {
            debug!(endpoint = %schema.endpoint, params = clean.len(), "parameters valid");
            Ok(clean)
        }
        Err(e) => {
            debug!(endpoint = %schema.endpoint, error = %e, "parameter validation failed");
            Err(e)
        }
    }
}

fn check(schema: &EndpointSchema, clean: &CleanParameters) -> Result<()> {
    for rule in schema.params {
        if rule.required && !clean.contains(rule.name) {
            return Err(TimezoneDbError::MissingRequired {
                param: rule.name.to_string(),
            });
        }

        if let (Some(value), Some(constraint)) = (clean.get(rule.name), rule.constraint) {
            match constraint {
                ValueConstraint::OneOf { options, .. } => {
                    if !options.contains(&value) {
                        return Err(TimezoneDbError::InvalidOption {
                            param: rule.name.to_string(),
                            value: value.to_string(),
                            allowed: to_owned(options),
                        });
                    }
                }
                ValueConstraint::FieldList { allowed, .. } => {
                    // tokens are compared verbatim
                    if let Some(field) = value.split(',').find(|f| !allowed.contains(f)) {
                        return Err(TimezoneDbError::InvalidField {
                            param: rule.name.to_string(),
                            field: field.to_string(),
                            allowed: to_owned(allowed),
                        });
                    }
                }
            }
        }

        if let Some(condition) = rule.condition {
            let Some(trigger) = clean.get(condition.controlling) else {
                continue;
            };
            if condition.triggers.contains(&trigger) && !clean.contains(rule.name) {
                return Err(TimezoneDbError::ConditionalMissing {
                    param: rule.name.to_string(),
                    controlling: condition.controlling.to_string(),
                    trigger: trigger.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
