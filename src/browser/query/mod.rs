//! Metadata query drafting and parsing
//!
//! The user types a free-text draft which is only validated on submission.
//! A valid draft is a JSON object and becomes a [`MetadataFilter`], a map of
//! keys to tagged [`FilterValue`] trees.

#[cfg(test)]
mod tests;

use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

use crate::{BrowserError, Result};

/// A parsed JSON value, tagged so consumers can pattern-match on it
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Object(BTreeMap<String, FilterValue>),
    Array(Vec<FilterValue>),
    String(String),
    /// Kept as parsed so integers stay exact
    Number(Number),
    Bool(bool),
    Null,
}

impl FilterValue {
    fn to_json(&self) -> Value {
        match self {
            Self::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Null => Value::Null,
        }
    }
}

impl From<Value> for FilterValue {
    #[inline]
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            Value::Null => Self::Null,
        }
    }
}

/// A structured metadata filter, handed to the record source unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFilter {
    fields: BTreeMap<String, FilterValue>,
}

impl MetadataFilter {
    /// Parse a JSON object into a filter. Any other JSON value is rejected.
    #[inline]
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| BrowserError::MalformedQuery(e.to_string()))?;

        match FilterValue::from(value) {
            FilterValue::Object(fields) => Ok(Self { fields }),
            other => Err(BrowserError::MalformedQuery(format!(
                "expected a JSON object, found {}",
                kind_name(&other)
            ))),
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for MetadataFilter {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let object = FilterValue::Object(self.fields.clone()).to_json();
        write!(f, "{}", object)
    }
}

const fn kind_name(value: &FilterValue) -> &'static str {
    match value {
        FilterValue::Object(_) => "an object",
        FilterValue::Array(_) => "an array",
        FilterValue::String(_) => "a string",
        FilterValue::Number(_) => "a number",
        FilterValue::Bool(_) => "a boolean",
        FilterValue::Null => "null",
    }
}

/// Draft text plus the last successfully submitted filter
#[derive(Debug, Clone, Default)]
pub struct MetadataQuery {
    draft: String,
    effective: Option<MetadataFilter>,
}

impl MetadataQuery {
    #[inline]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[inline]
    pub fn effective(&self) -> Option<&MetadataFilter> {
        self.effective.as_ref()
    }

    /// Replace the draft text without validating it
    #[inline]
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Store `text` as the draft and try to parse it.
    ///
    /// On failure the draft keeps `text` and the effective filter is left as it was.
    #[inline]
    pub fn submit(&mut self, text: impl Into<String>) -> Result<&MetadataFilter> {
        self.draft = text.into();
        match MetadataFilter::parse(&self.draft) {
            Ok(filter) => {
                debug!("Querying metadata: {}", filter);
                Ok(&*self.effective.insert(filter))
            }
            Err(e) => {
                warn!("Invalid JSON input: {}", e);
                Err(e)
            }
        }
    }

    /// Empty the draft. The effective filter stays in place.
    #[inline]
    pub fn clear(&mut self) {
        self.draft.clear();
    }
}
