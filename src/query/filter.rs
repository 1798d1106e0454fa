//! # Filter Composition
//!
//! Turns the nested filter object a UI sends into the ordered list of
//! `field||operator||value` conditions the query builder serializes.
//!
//! ## Rules
//!
//! For every dot-path key of the flattened filter:
//!
//! 1. `key` splits on `||`. The second segment, when present, is the operator;
//!    otherwise the operator is case-insensitive contains (`$contL`).
//! 2. A field starting with `_` and containing a `.` loses everything up to and
//!    including the first dot (`_author.author.id` becomes `author.id`).
//! 3. A field ending in `.id` always uses `$eq`. Otherwise a field starting
//!    with `is` always uses `$eq`. Both rules win over an explicit operator.
//!
//! Conditions come out in the key order of the input object.

use crate::error::{ProviderError, Result};
use crate::query::CondOperator;
use serde_json::{Map, Value};

const OPERATOR_SEPARATOR: &str = "||";

/// A single `field||operator||value` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub field: String,
    pub operator: CondOperator,
    pub value: Value,
}

impl QueryFilter {
    pub fn new(field: impl Into<String>, operator: CondOperator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Flattens a nested object into dot-joined key paths.
///
/// Non-empty objects are descended into; arrays, empty objects, scalars and
/// null are kept as leaves. A path produced twice keeps its first position
/// and its last value. Anything but an object flattens to an empty map.
pub fn flatten_object(value: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            flatten_into(child, key.clone(), &mut flat);
        }
    }
    flat
}

fn flatten_into(value: &Value, path: String, flat: &mut Map<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(child, format!("{path}.{key}"), flat);
            }
        }
        leaf => {
            flat.insert(path, leaf.clone());
        }
    }
}

/// Builds the ordered condition list for a caller-supplied filter.
///
/// `""`, `null` and any object whose `q` is `""` mean "no filter".
pub fn compose_filter(filter: &Value) -> Result<Vec<QueryFilter>> {
    let map = match filter {
        Value::Null => return Ok(Vec::new()),
        Value::String(s) if s.is_empty() => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(ProviderError::InvalidQuery(format!(
                "Filter must be an object, got {other}"
            )))
        }
    };

    if matches!(map.get("q"), Some(Value::String(q)) if q.is_empty()) {
        return Ok(Vec::new());
    }

    flatten_object(filter)
        .into_iter()
        .map(|(key, value)| -> Result<QueryFilter> {
            let (field, operator) = parse_key(&key);
            Ok(QueryFilter {
                field,
                operator: operator.parse()?,
                value,
            })
        })
        .collect()
}

/// Splits a flattened key into its field name and operator token.
fn parse_key(key: &str) -> (String, &str) {
    let mut parts = key.split(OPERATOR_SEPARATOR);
    let mut field = parts.next().unwrap_or_default();
    let mut operator = match parts.next() {
        Some(op) if !op.is_empty() => op,
        _ => CondOperator::ContainsLow.as_str(),
    };

    if field.starts_with('_') {
        if let Some((_, rest)) = field.split_once('.') {
            field = rest;
        }
    }

    // Identifiers (uuids included) cannot be LIKE-matched; `is*` fields are booleans.
    if field.ends_with(".id") || field.starts_with("is") {
        operator = CondOperator::Equals.as_str();
    }

    (field.to_string(), operator)
}
