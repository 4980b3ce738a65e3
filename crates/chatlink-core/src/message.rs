use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Shapes accepted as message text when building a link.
///
/// Untagged, so a raw JSON value deserializes straight into the matching
/// variant: `"hi"` → `Text`, `[1, 2]` → `List`, `{}` → `Map`. A `Map` is
/// carried so that callers can hand over arbitrary input, but rendering one
/// is an error; links only take stringifiable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Flag(bool),
    Number(i64),
    Text(String),
    List(Vec<Message>),
    Map(BTreeMap<String, Message>),
}

impl Message {
    /// The pre-encoding string form: scalars via `Display`, lists as their
    /// comma-joined elements (`[1, 2]` → `"1,2"`). A `Map` at any depth
    /// fails with `InvalidArgument`.
    pub fn render(&self) -> Result<String, DomainError> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Flag(b) => Ok(b.to_string()),
            Self::List(items) => {
                let rendered: Result<Vec<String>, DomainError> =
                    items.iter().map(Message::render).collect();
                Ok(rendered?.join(","))
            }
            Self::Map(_) => Err(DomainError::InvalidArgument),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "<object>"),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Message {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Message {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}
