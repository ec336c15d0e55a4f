use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An event to apply to state.
///
/// `payload` and `meta` are always present; `null` is normalized to `{}` both
/// when building through a creator and when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Discriminant used by reducers to pick a handler.
    #[serde(rename = "type", default, deserialize_with = "string_or_empty")]
    pub kind: String,
    #[serde(default = "empty_object", deserialize_with = "object_or_empty")]
    pub payload: Value,
    #[serde(default = "empty_object", deserialize_with = "object_or_empty")]
    pub meta: Value,
    /// Set only on actions built by error creators.
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Action {
    pub fn new(kind: impl Into<String>, payload: Option<Value>, meta: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload: or_empty(payload),
            meta: or_empty(meta),
            error: false,
            message: None,
        }
    }

    /// Returns true if this is an error-flavored action.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Serialize into a plain JSON record.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| empty_object())
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::new("", None, None)
    }
}

/// A fresh `{}`.
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

pub(crate) fn or_empty(value: Option<Value>) -> Value {
    match value {
        None | Some(Value::Null) => empty_object(),
        Some(v) => v,
    }
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(or_empty(value))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(value: &bool) -> bool {
    !*value
}
