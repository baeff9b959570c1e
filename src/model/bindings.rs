use crate::error::DecodeError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::fs;

/// A runtime value captured by an upstream input-collecting node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindingValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Multi-select style answers.
    List(Vec<String>),
    Null,
}

impl BindingValue {
    /// The string form operators compare against. `None` for `Null`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            BindingValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            BindingValue::Number(n) => Some(Cow::Owned(format_number(*n))),
            BindingValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            BindingValue::List(items) => Some(Cow::Owned(items.join(","))),
            BindingValue::Null => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BindingValue::Text(s) => s.is_empty(),
            BindingValue::List(items) => items.is_empty(),
            BindingValue::Null => true,
            BindingValue::Number(_) | BindingValue::Bool(_) => false,
        }
    }
}

// Integral values print without a fractional part, so `25.0` compares as "25".
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for BindingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingValue::List(items) => write!(f, "[{}]", items.join(", ")),
            BindingValue::Null => write!(f, "null"),
            other => match other.as_text() {
                Some(text) => write!(f, "{}", text),
                None => write!(f, "null"),
            },
        }
    }
}

impl From<&str> for BindingValue {
    fn from(s: &str) -> Self {
        BindingValue::Text(s.to_string())
    }
}

impl From<String> for BindingValue {
    fn from(s: String) -> Self {
        BindingValue::Text(s)
    }
}

impl From<f64> for BindingValue {
    fn from(n: f64) -> Self {
        BindingValue::Number(n)
    }
}

impl From<bool> for BindingValue {
    fn from(b: bool) -> Self {
        BindingValue::Bool(b)
    }
}

impl From<Vec<String>> for BindingValue {
    fn from(items: Vec<String>) -> Self {
        BindingValue::List(items)
    }
}

/// A snapshot of variable name to captured value, supplied by the flow store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableBindings(AHashMap<String, BindingValue>);

impl VariableBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses bindings from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        if !raw.is_object() {
            return Err(DecodeError::BindingsNotAnObject);
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// Loads bindings from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DecodeError> {
        let content = fs::read_to_string(path).map_err(|source| DecodeError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<BindingValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<BindingValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a variable. Unknown names are absent.
    pub fn get(&self, name: &str) -> Option<&BindingValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BindingValue)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableBindings
where
    K: Into<String>,
    V: Into<BindingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
