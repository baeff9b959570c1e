use crate::model::{Combinator, ConditionMode, ConditionNode, Output, VariableBindings};
use crate::trace::TraceFormatter;
use itertools::Itertools;
use rayon::prelude::*;

mod operators;
mod rules;

pub use rules::{evaluate_rule, evaluate_rule_set, trace_rule, trace_rule_set};

/// The output path a multi-output condition selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSelection {
    /// Position of the output in the node's stored order.
    pub index: usize,
    pub id: String,
    pub label: String,
    pub value: String,
}

impl OutputSelection {
    fn from_output(index: usize, output: &Output) -> Self {
        Self {
            index,
            id: output.id.clone(),
            label: output.label.clone(),
            value: output.value.clone(),
        }
    }
}

/// The outcome of evaluating a condition node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Simple mode: whether the rule-set passed. Multi-output mode: whether any output was selected.
    pub matched: bool,
    /// The selected output. Always `None` in simple mode.
    pub output: Option<OutputSelection>,
    /// A human-readable explanation of the rules that decided the result.
    pub reason: String,
}

/// Evaluates a condition node against a bindings snapshot.
///
/// Simple mode evaluates `rule_set`. Multi-output mode walks `outputs` in stored
/// order and selects the first whose rules all pass; an output without rules is
/// never selected.
pub fn evaluate_condition(node: &ConditionNode, bindings: &VariableBindings) -> EvaluationResult {
    let result = match node.mode {
        ConditionMode::Simple => {
            let trace = trace_rule_set(&node.rule_set, bindings);
            EvaluationResult {
                matched: trace.outcome,
                output: None,
                reason: TraceFormatter::format_rule_set(&trace),
            }
        }
        ConditionMode::MultiOutput => select_output(&node.outputs, bindings),
    };
    tracing::debug!(
        mode = %node.mode,
        matched = result.matched,
        output = result.output.as_ref().map(|o| o.value.as_str()),
        "condition evaluated"
    );
    result
}

fn select_output(outputs: &[Output], bindings: &VariableBindings) -> EvaluationResult {
    let mut rejected = Vec::new();
    for (index, output) in outputs.iter().enumerate() {
        let trace = rules::trace_rules(Combinator::And, &output.rules, bindings);
        if trace.outcome {
            return EvaluationResult {
                matched: true,
                output: Some(OutputSelection::from_output(index, output)),
                reason: format!(
                    "{} selected: {}",
                    output.label,
                    TraceFormatter::format_rule_set(&trace)
                ),
            };
        }
        rejected.push(format!(
            "{} rejected: {}",
            output.label,
            TraceFormatter::format_rule_set(&trace)
        ));
    }

    let reason = if rejected.is_empty() {
        "No outputs configured".to_string()
    } else {
        format!("No output matched ({})", rejected.iter().join("; "))
    };
    EvaluationResult {
        matched: false,
        output: None,
        reason,
    }
}

/// Holds a condition node and evaluates it repeatedly against different snapshots.
///
/// An `Evaluator` is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    node: ConditionNode,
}

impl Evaluator {
    pub fn new(node: ConditionNode) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ConditionNode {
        &self.node
    }

    /// Evaluates the node against one snapshot.
    pub fn eval(&self, bindings: &VariableBindings) -> EvaluationResult {
        evaluate_condition(&self.node, bindings)
    }

    /// Evaluates the node against many snapshots in parallel.
    /// Results are returned in the order of `snapshots`.
    pub fn eval_batch(&self, snapshots: &[VariableBindings]) -> Vec<EvaluationResult> {
        snapshots
            .par_iter()
            .map(|bindings| evaluate_condition(&self.node, bindings))
            .collect()
    }

    /// The variable names the active mode reads, sorted and de-duplicated.
    pub fn required_fields(&self) -> Vec<String> {
        self.node.referenced_fields()
    }
}
