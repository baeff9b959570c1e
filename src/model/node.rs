use super::{Output, RuleSet};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// The two states a condition node can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionMode {
    /// A single rule-set yields a boolean.
    #[default]
    Simple,
    /// An ordered list of outputs, the first matching one is selected.
    MultiOutput,
}

impl fmt::Display for ConditionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionMode::Simple => write!(f, "simple"),
            ConditionMode::MultiOutput => write!(f, "multi-output"),
        }
    }
}

/// A branching decision node.
///
/// Only the part of the node that belongs to the active `mode` is evaluated:
/// `rule_set` in simple mode, `outputs` in multi-output mode. The other part
/// is kept so a mode switch can carry rules across.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionNode {
    pub mode: ConditionMode,
    #[serde(default)]
    pub rule_set: RuleSet,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl ConditionNode {
    /// Creates an empty simple-mode node, the state an editor inserts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simple(rule_set: RuleSet) -> Self {
        Self {
            mode: ConditionMode::Simple,
            rule_set,
            outputs: Vec::new(),
        }
    }

    pub fn multi_output(outputs: Vec<Output>) -> Self {
        Self {
            mode: ConditionMode::MultiOutput,
            rule_set: RuleSet::default(),
            outputs,
        }
    }

    /// Parses a node from its JSON form. A payload without `mode` is rejected.
    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a node from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DecodeError> {
        let content = fs::read_to_string(path).map_err(|source| DecodeError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every variable name read by the active mode, sorted and de-duplicated.
    pub fn referenced_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = match self.mode {
            ConditionMode::Simple => self.rule_set.rules.iter().map(|r| r.field.clone()).collect(),
            ConditionMode::MultiOutput => self
                .outputs
                .iter()
                .flat_map(|o| o.rules.iter().map(|r| r.field.clone()))
                .collect(),
        };
        fields.retain(|f| !f.is_empty());
        fields.sort();
        fields.dedup();
        fields
    }
}
