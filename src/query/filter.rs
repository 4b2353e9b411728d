use crate::error::{GatewayError, Result};

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

/// Typed view of the filter object posted by a caller.
///
/// Only `author`, `publisher`, `categories` and `release_after` are
/// recognized. Any other key is ignored, and a recognized key holding a value
/// of the wrong shape is treated as if it were absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub author: Option<String>,
    pub publisher: Option<String>,
    /// Never `Some` with an empty list.
    pub categories: Option<Vec<String>>,
    /// Inclusive lower bound on `release_date`, always a valid `YYYY-MM-DD` date.
    pub release_after: Option<String>,
}

impl FilterCriteria {
    /// Decodes a raw request body. Fails only when the body is not a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| GatewayError::InvalidRequest(format!("invalid filter format: {}", e)))?;

        match value {
            Value::Object(map) => Ok(Self::from_map(&map)),
            other => Err(GatewayError::InvalidRequest(format!(
                "invalid filter format: expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_map(filter: &Map<String, Value>) -> Self {
        let release_after = string_field(filter, "release_after").filter(|date| {
            let valid = is_date_valid(date);
            if !valid {
                tracing::warn!(
                    "Ignoring filter key 'release_after': '{}' is not a YYYY-MM-DD date",
                    date
                );
            }
            valid
        });

        Self {
            author: string_field(filter, "author"),
            publisher: string_field(filter, "publisher"),
            categories: string_list_field(filter, "categories"),
            release_after,
        }
    }
}

/// Checks that `date` is written as `YYYY-MM-DD` and names a real calendar day.
pub fn is_date_valid(date: &str) -> bool {
    DATE_SHAPE.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

fn string_field(filter: &Map<String, Value>, key: &str) -> Option<String> {
    match filter.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            tracing::warn!(
                "Ignoring filter key '{}': expected string, got {}",
                key,
                json_kind(other)
            );
            None
        }
    }
}

fn string_list_field(filter: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = match filter.get(key)? {
        Value::Array(items) => items,
        other => {
            tracing::warn!(
                "Ignoring filter key '{}': expected array of strings, got {}",
                key,
                json_kind(other)
            );
            return None;
        }
    };

    let values: Option<Vec<String>> = items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect();

    match values {
        Some(values) if !values.is_empty() => Some(values),
        Some(_) => None,
        None => {
            tracing::warn!(
                "Ignoring filter key '{}': array contains non-string values",
                key
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
