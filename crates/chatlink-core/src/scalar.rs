use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw input shape handed to the validator. Callers that receive untyped
/// values (CLI arguments, config) convert them into one of these variants at
/// the boundary; only `Int` can pass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Flag(bool),
    Int(i64),
    Text(String),
}

impl ScalarValue {
    /// Best-effort conversion of a raw string: integer first, then boolean,
    /// falling back to text (which the validator rejects as a bad datatype).
    pub fn from_raw(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Int(n);
        }
        match raw {
            "true" => Self::Flag(true),
            "false" => Self::Flag(false),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
