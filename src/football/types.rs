use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level envelope every API-Football endpoint answers with.
///
/// `response` is kept raw: the teams endpoint returns a list, the statistics
/// endpoint returns an object (or occasionally a one-element list).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub get: Option<String>,
    #[serde(default)]
    pub results: Option<u64>,
    /// `[]` when the call succeeded, an object of messages otherwise.
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub response: Option<Value>,
}

impl ApiEnvelope {
    /// Provider-side errors (bad token, quota, invalid parameter), if any.
    pub fn provider_errors(&self) -> Option<&Value> {
        match &self.errors {
            Value::Object(map) if !map.is_empty() => Some(&self.errors),
            Value::Array(items) if !items.is_empty() => Some(&self.errors),
            _ => None,
        }
    }
}
