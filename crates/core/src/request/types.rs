use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A route/action parameter value.
///
/// Route parameters keep the type the router resolved them to, so the string
/// `"true"` and the boolean `true` are different values.
/// Variant order matters for untagged deserialization: `true` must land in
/// `Bool` and `1` in `Int` before `Float` and `String` are tried, and `Null`
/// must come before the `Other` catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Null,
    /// Arrays and objects, e.g. the router's positional `pass` list
    Other(serde_json::Value),
}

impl ParamValue {
    /// Parse a scalar written on a command line or in a config file.
    /// JSON values (`true`, `42`, `1.5`, `null`, `"quoted"`, `[1]`) keep their
    /// type, anything else is taken verbatim as a string.
    pub fn parse_scalar(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| ParamValue::String(raw.to_string()))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::String(s) => write!(f, "{s:?}"),
            ParamValue::Null => write!(f, "null"),
            ParamValue::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

/// Read-only view of an incoming request as seen by detectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Query string parameters, always string-valued.
    pub query: HashMap<String, String>,
    /// Route/action parameters resolved by the router.
    pub params: HashMap<String, ParamValue>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a query parameter by key
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(|s| s.as_str())
    }

    /// Get a route parameter by key
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}
