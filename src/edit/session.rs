use crate::error::EditError;
use crate::model::{ConditionMode, ConditionNode, OperatorKind, Output, Rule};

/// Per-editor-session context.
///
/// Allocates ids and builds blank rules and outputs for the editing operations.
/// The session never owns the node being edited; callers pass it in and keep
/// the node returned by each operation.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    next_rule: u64,
    next_output: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank `equals` rule with a fresh id that does not clash with `node`.
    pub fn new_rule(&mut self, node: &ConditionNode) -> Rule {
        let id = loop {
            self.next_rule += 1;
            let candidate = format!("rule-{}", self.next_rule);
            if !rule_id_in_use(node, &candidate) {
                break candidate;
            }
        };
        Rule::new(id, "", OperatorKind::Equals, "")
    }

    /// A blank output named after the first free letter, e.g. `Output C` with value `C`.
    ///
    /// A letter is taken while any output uses it as its value or in its default label.
    pub fn new_output(&mut self, node: &ConditionNode) -> Output {
        let id = loop {
            self.next_output += 1;
            let candidate = format!("output-{}", self.next_output);
            if !node.outputs.iter().any(|o| o.id == candidate) {
                break candidate;
            }
        };
        let letter = (0..)
            .map(output_letter)
            .find(|letter| !letter_in_use(node, letter))
            .unwrap_or_default();
        Output::new(id, format!("Output {}", letter), letter)
    }

    /// Adds a blank rule to the rule-set the active mode evaluates.
    ///
    /// In simple mode `output_id` must be `None`; in multi-output mode it names the
    /// output that receives the rule. Any other combination is an
    /// [`EditError::InactiveTarget`].
    pub fn add_blank_rule(
        &mut self,
        node: ConditionNode,
        output_id: Option<&str>,
    ) -> Result<ConditionNode, EditError> {
        match (node.mode, output_id) {
            (ConditionMode::Simple, None) => {
                let rule = self.new_rule(&node);
                node.add_rule(rule)
            }
            (ConditionMode::MultiOutput, Some(output_id)) => {
                let rule = self.new_rule(&node);
                node.add_output_rule(output_id, rule)
            }
            (mode, Some(output_id)) => Err(EditError::InactiveTarget {
                target: format!("output '{}'", output_id),
                mode,
            }),
            (mode, None) => Err(EditError::InactiveTarget {
                target: "the flat rule-set".to_string(),
                mode,
            }),
        }
    }

    /// Adds a blank output at the end of the node's outputs.
    pub fn add_blank_output(&mut self, node: ConditionNode) -> Result<ConditionNode, EditError> {
        let output = self.new_output(&node);
        node.add_output(output)
    }
}

fn rule_id_in_use(node: &ConditionNode, id: &str) -> bool {
    node.rule_set.rules.iter().any(|r| r.id == id)
        || node
            .outputs
            .iter()
            .flat_map(|o| o.rules.iter())
            .any(|r| r.id == id)
}

fn letter_in_use(node: &ConditionNode, letter: &str) -> bool {
    node.outputs
        .iter()
        .any(|o| o.value == letter || o.label.strip_prefix("Output ") == Some(letter))
}

/// Spreadsheet-style letters: 0 is `A`, 25 is `Z`, 26 is `AA`.
fn output_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}
