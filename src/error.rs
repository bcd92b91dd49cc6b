//! TimezoneDB client error types

/// TimezoneDB client error types
#[derive(Debug, thiserror::Error)]
pub enum TimezoneDbError {
    // Construction errors
    #[error("API type not valid: '{0}' (expected one of: api, vip)")]
    InvalidApiType(String),

    #[error("you need to provide an API key")]
    MissingApiKey,

    #[error("API version not valid: '{0}' (expected: 2.1)")]
    InvalidApiVersion(String),

    // Validation errors
    #[error("invalid endpoint selected: {0}")]
    UnknownEndpoint(String),

    #[error("param [{param}] must be present in request")]
    MissingRequired { param: String },

    #[error("param [{param}] must be one of the options {allowed:?}, got '{value}'")]
    InvalidOption {
        param: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("param [{param}] must contain only set of {allowed:?} values, got '{field}'")]
    InvalidField {
        param: String,
        field: String,
        allowed: Vec<String>,
    },

    /// A parameter became required because of another parameter's value.
    #[error(
        "param [{param}] must be present in request when [{controlling}] param value is '{trigger}'"
    )]
    ConditionalMissing {
        param: String,
        controlling: String,
        trigger: String,
    },

    // Network errors
    #[error("transport error: {0}")]
    Transport(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TimezoneDbError {
    /// Whether this error was raised by parameter validation, before any
    /// request left the client.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownEndpoint(_)
                | Self::MissingRequired { .. }
                | Self::InvalidOption { .. }
                | Self::InvalidField { .. }
                | Self::ConditionalMissing { .. }
        )
    }

    /// The offending parameter name, for validation errors that have one.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { param }
            | Self::InvalidOption { param, .. }
            | Self::InvalidField { param, .. }
            | Self::ConditionalMissing { param, .. } => Some(param),
            _ => None,
        }
    }

    /// Short label used for the `kind` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidApiType(_) => "invalid_api_type",
            Self::MissingApiKey => "missing_api_key",
            Self::InvalidApiVersion(_) => "invalid_api_version",
            Self::UnknownEndpoint(_) => "unknown_endpoint",
            Self::MissingRequired { .. } => "missing_required",
            Self::InvalidOption { .. } => "invalid_option",
            Self::InvalidField { .. } => "invalid_field",
            Self::ConditionalMissing { .. } => "conditional_missing",
            Self::Transport(_) => "transport",
            Self::Json(_) => "json",
            Self::Configuration(_) => "configuration",
        }
    }
}

impl From<reqwest::Error> for TimezoneDbError {
    fn from(err: reqwest::Error) -> Self {
        TimezoneDbError::Transport(err.to_string())
    }
}

/// Result type alias for TimezoneDB operations
pub type Result<T> = std::result::Result<T, TimezoneDbError>;
