//! Pure editing transformations for condition nodes.
//!
//! Every operation takes the current node by value and returns the next node,
//! so an editor can apply them without the engine holding any state.

use crate::error::EditError;
use crate::model::{Combinator, ConditionMode, ConditionNode, OperatorKind, Output, Rule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

mod mode;
mod session;

pub use session::EditorSession;

/// A partial update to a rule. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub operator: Option<OperatorKind>,
    #[serde(default)]
    pub value: Option<String>,
}

impl RulePatch {
    fn apply_to(self, rule: &mut Rule) {
        if let Some(field) = self.field {
            rule.field = field;
        }
        if let Some(operator) = self.operator {
            rule.operator = operator;
        }
        if let Some(value) = self.value {
            rule.value = value;
        }
    }
}

/// A partial update to an output's label or discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// An editing command as an editor would send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Edit {
    AddRule { rule: Rule },
    UpdateRule { rule_id: String, patch: RulePatch },
    DeleteRule { rule_id: String },
    SetCombinator { operator: Combinator },
    AddOutput { output: Output },
    UpdateOutput { output_id: String, patch: OutputPatch },
    DeleteOutput { output_id: String },
    AddOutputRule { output_id: String, rule: Rule },
    UpdateOutputRule { output_id: String, rule_id: String, patch: RulePatch },
    DeleteOutputRule { output_id: String, rule_id: String },
    SwitchMode { mode: ConditionMode },
}

impl ConditionNode {
    /// Applies one editing command.
    pub fn apply(self, edit: Edit) -> Result<Self, EditError> {
        match edit {
            Edit::AddRule { rule } => self.add_rule(rule),
            Edit::UpdateRule { rule_id, patch } => self.update_rule(&rule_id, patch),
            Edit::DeleteRule { rule_id } => self.delete_rule(&rule_id),
            Edit::SetCombinator { operator } => Ok(self.set_combinator(operator)),
            Edit::AddOutput { output } => self.add_output(output),
            Edit::UpdateOutput { output_id, patch } => self.update_output(&output_id, patch),
            Edit::DeleteOutput { output_id } => self.delete_output(&output_id),
            Edit::AddOutputRule { output_id, rule } => self.add_output_rule(&output_id, rule),
            Edit::UpdateOutputRule {
                output_id,
                rule_id,
                patch,
            } => self.update_output_rule(&output_id, &rule_id, patch),
            Edit::DeleteOutputRule { output_id, rule_id } => {
                self.delete_output_rule(&output_id, &rule_id)
            }
            Edit::SwitchMode { mode } => Ok(self.switch_mode(mode)),
        }
    }

    /// Appends a rule to the simple-mode rule-set.
    pub fn add_rule(mut self, rule: Rule) -> Result<Self, EditError> {
        push_rule(&mut self.rule_set.rules, rule)?;
        Ok(self)
    }

    pub fn update_rule(mut self, rule_id: &str, patch: RulePatch) -> Result<Self, EditError> {
        patch.apply_to(find_rule(&mut self.rule_set.rules, rule_id)?);
        Ok(self)
    }

    pub fn delete_rule(mut self, rule_id: &str) -> Result<Self, EditError> {
        remove_rule(&mut self.rule_set.rules, rule_id)?;
        Ok(self)
    }

    pub fn set_combinator(mut self, operator: Combinator) -> Self {
        self.rule_set.operator = operator;
        self
    }

    /// Appends an output. Output order is evaluation order.
    ///
    /// The output's own rules must carry unique ids, like any other rule sequence.
    pub fn add_output(mut self, output: Output) -> Result<Self, EditError> {
        if self.outputs.iter().any(|o| o.id == output.id) {
            return Err(EditError::DuplicateId(output.id));
        }
        let mut rule_ids = HashSet::new();
        if let Some(dup) = output.rules.iter().find(|r| !rule_ids.insert(r.id.as_str())) {
            return Err(EditError::DuplicateId(dup.id.clone()));
        }
        self.outputs.push(output);
        Ok(self)
    }

    pub fn update_output(mut self, output_id: &str, patch: OutputPatch) -> Result<Self, EditError> {
        let output = find_output(&mut self.outputs, output_id)?;
        if let Some(label) = patch.label {
            output.label = label;
        }
        if let Some(value) = patch.value {
            output.value = value;
        }
        Ok(self)
    }

    pub fn delete_output(mut self, output_id: &str) -> Result<Self, EditError> {
        let index = self
            .outputs
            .iter()
            .position(|o| o.id == output_id)
            .ok_or_else(|| EditError::OutputNotFound(output_id.to_string()))?;
        self.outputs.remove(index);
        Ok(self)
    }

    pub fn add_output_rule(mut self, output_id: &str, rule: Rule) -> Result<Self, EditError> {
        push_rule(&mut find_output(&mut self.outputs, output_id)?.rules, rule)?;
        Ok(self)
    }

    pub fn update_output_rule(
        mut self,
        output_id: &str,
        rule_id: &str,
        patch: RulePatch,
    ) -> Result<Self, EditError> {
        let output = find_output(&mut self.outputs, output_id)?;
        patch.apply_to(find_rule(&mut output.rules, rule_id)?);
        Ok(self)
    }

    pub fn delete_output_rule(mut self, output_id: &str, rule_id: &str) -> Result<Self, EditError> {
        remove_rule(&mut find_output(&mut self.outputs, output_id)?.rules, rule_id)?;
        Ok(self)
    }
}

fn push_rule(rules: &mut Vec<Rule>, rule: Rule) -> Result<(), EditError> {
    if rules.iter().any(|r| r.id == rule.id) {
        return Err(EditError::DuplicateId(rule.id));
    }
    rules.push(rule);
    Ok(())
}

fn find_rule<'a>(rules: &'a mut [Rule], rule_id: &str) -> Result<&'a mut Rule, EditError> {
    rules
        .iter_mut()
        .find(|r| r.id == rule_id)
        .ok_or_else(|| EditError::RuleNotFound(rule_id.to_string()))
}

fn remove_rule(rules: &mut Vec<Rule>, rule_id: &str) -> Result<(), EditError> {
    let index = rules
        .iter()
        .position(|r| r.id == rule_id)
        .ok_or_else(|| EditError::RuleNotFound(rule_id.to_string()))?;
    rules.remove(index);
    Ok(())
}

fn find_output<'a>(
    outputs: &'a mut [Output],
    output_id: &str,
) -> Result<&'a mut Output, EditError> {
    outputs
        .iter_mut()
        .find(|o| o.id == output_id)
        .ok_or_else(|| EditError::OutputNotFound(output_id.to_string()))
}
