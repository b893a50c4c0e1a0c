//! Per-tenant context codec
//!
//! The context column holds an opaque JSON object written by several parties.
//! Only a handful of keys mean anything to the console; everything else is
//! carried through decode/mutate/encode untouched.

use serde_json::{Map, Value};
use tracing::error;

use crate::error::DomainError;

/// Payload substituted for an empty context column.
pub const EMPTY_CONTEXT_DEFAULT: &str = r#"{"debug":"false"}"#;

/// Context keys the console reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKey {
    /// String flag, `"true"` or `"false"`.
    Debug,
    /// Boolean flag.
    AllowedUnlicensed,
    /// Opaque rejection state, dropped when unlicensed use is allowed.
    Reject,
    /// Opaque license payload, rendered verbatim.
    License,
}

impl ContextKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContextKey::Debug => "debug",
            ContextKey::AllowedUnlicensed => "allowed-unlicensed",
            ContextKey::Reject => "reject",
            ContextKey::License => "license",
        }
    }
}

/// Decoded view of a tenant context blob.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantContext {
    entries: Map<String, Value>,
}

impl TenantContext {
    /// Decode a raw context payload.
    ///
    /// An empty payload decodes as `{"debug":"false"}`. A payload that is not
    /// a JSON object is logged and decodes as an empty context.
    pub fn decode(raw: &str) -> Self {
        let raw = if raw.is_empty() {
            EMPTY_CONTEXT_DEFAULT
        } else {
            raw
        };
        match Self::try_decode(raw) {
            Ok(ctx) => ctx,
            Err(e) => {
                error!("error parsing tenant context: {}", e);
                Self::default()
            }
        }
    }

    pub fn try_decode(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(entries) => Ok(Self { entries }),
            Value::Null => Ok(Self::default()),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec(&self.entries).map_err(|e| DomainError::ContextEncode(e.to_string()))
    }

    pub fn encode_string(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.entries).map_err(|e| DomainError::ContextEncode(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: ContextKey) -> bool {
        self.entries.contains_key(key.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True only when `debug` is the string `"true"`.
    pub fn debug_enabled(&self) -> bool {
        matches!(self.get(ContextKey::Debug.as_str()), Some(Value::String(s)) if s == "true")
    }

    /// True only when `allowed-unlicensed` is the boolean `true`.
    pub fn allowed_unlicensed(&self) -> bool {
        matches!(
            self.get(ContextKey::AllowedUnlicensed.as_str()),
            Some(Value::Bool(true))
        )
    }

    /// License value as shown in the tenant row header.
    pub fn license_display(&self) -> String {
        match self.get(ContextKey::License.as_str()) {
            None | Some(Value::Null) => "<nil>".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Flip `debug` between `"true"` and `"false"`; anything other than
    /// `"true"` counts as `"false"`. Returns the new state.
    pub fn toggle_debug(&mut self) -> bool {
        let enabled = !self.debug_enabled();
        self.entries.insert(
            ContextKey::Debug.as_str().to_string(),
            Value::String(enabled.to_string()),
        );
        enabled
    }

    /// Flip `allowed-unlicensed`. Allowing also drops `reject`. Returns the
    /// new state.
    pub fn toggle_unlicensed(&mut self) -> bool {
        let allowed = !self.allowed_unlicensed();
        self.entries.insert(
            ContextKey::AllowedUnlicensed.as_str().to_string(),
            Value::Bool(allowed),
        );
        if allowed {
            self.entries.remove(ContextKey::Reject.as_str());
        }
        allowed
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
