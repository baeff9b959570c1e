use super::Rule;
use serde::{Deserialize, Serialize};

/// A named path out of a multi-output condition.
///
/// The rules of an output are always combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub id: String,
    /// Display name shown on the node.
    pub label: String,
    /// Path discriminator, e.g. `"A"` or `"B"`.
    pub value: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Output {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }
}
