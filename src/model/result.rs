use serde::Serialize;
use serde_json::Value;

/// What an action resolves to, shaped the way data-provider callers expect.
///
/// Serializes to `{ "data": .., "total": .. }` for lists and `{ "data": .. }`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionResult {
    /// `GET_LIST` and `GET_MANY_REFERENCE`: one page plus the server's total.
    List { data: Value, total: Value },
    /// Single-record kinds.
    One { data: Value },
    /// Bulk kinds: one response body per id, in id order.
    Many { data: Vec<Value> },
}

impl ActionResult {
    /// The `data` member of list and single-record results.
    ///
    /// `None` for [`ActionResult::Many`], whose bodies are read with
    /// [`ActionResult::items`] or taken whole with [`ActionResult::into_data`].
    pub fn data(&self) -> Option<&Value> {
        match self {
            ActionResult::List { data, .. } | ActionResult::One { data } => Some(data),
            ActionResult::Many { .. } => None,
        }
    }

    /// Consumes the result and returns its `data` member as it would be
    /// serialized. Bulk bodies become a JSON array.
    pub fn into_data(self) -> Value {
        match self {
            ActionResult::List { data, .. } | ActionResult::One { data } => data,
            ActionResult::Many { data } => Value::Array(data),
        }
    }

    /// The bulk response bodies, empty for other variants.
    pub fn items(&self) -> &[Value] {
        match self {
            ActionResult::Many { data } => data,
            _ => &[],
        }
    }

    /// The server-reported total, when it is an integer.
    pub fn total(&self) -> Option<u64> {
        match self {
            ActionResult::List { total, .. } => total.as_u64(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ActionResult::List { data, total } => {
                serde_json::json!({ "data": data, "total": total })
            }
            ActionResult::One { data } => serde_json::json!({ "data": data }),
            ActionResult::Many { data } => serde_json::json!({ "data": data }),
        }
    }
}
