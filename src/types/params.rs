//! Per-call parameter maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-built parameters for one call.
///
/// Values are optional: `None` and `Some("")` both mean "not provided".
/// That equivalence is applied once, by [`RequestParameters::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParameters {
    entries: BTreeMap<String, Option<String>>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.entries.insert(name.into(), value);
    }

    /// Raw value as submitted, before normalization.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry whose value is absent or empty.
    pub fn normalize(&self) -> CleanParameters {
        let entries = self
            .entries
            .iter()
            .filter_map(|(name, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((name.clone(), v.to_string())),
                _ => None,
            })
            .collect();
        CleanParameters { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParameters
where
    K: Into<String>,
    V: Into<Option<String>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<CleanParameters> for RequestParameters {
    fn from(clean: CleanParameters) -> Self {
        clean.entries.into_iter().map(|(k, v)| (k, Some(v))).collect()
    }
}

/// Normalized parameters: only non-empty values remain.
///
/// This is what validation returns and what is sent as the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CleanParameters {
    entries: BTreeMap<String, String>,
}

impl CleanParameters {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requested response format, if any.
    pub fn format(&self) -> Option<&str> {
        self.get("format")
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}
