mod formatter;

pub use formatter::TraceFormatter;

use crate::model::{Combinator, OperatorKind};

/// A record of how one rule was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTrace {
    pub rule_id: String,
    pub field: String,
    pub operator: OperatorKind,
    pub expected: String,
    /// The bound value as text, `None` when the variable was absent.
    pub actual: Option<String>,
    pub outcome: bool,
}

/// One position in a rule-set trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    Evaluated(RuleTrace),
    /// Skipped because an earlier rule already decided the combinator.
    NotEvaluated,
}

/// A record of how a rule-set was evaluated, rule by rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetTrace {
    pub combinator: Combinator,
    pub steps: Vec<TraceStep>,
    pub outcome: bool,
}

impl RuleSetTrace {
    pub fn evaluated(&self) -> impl Iterator<Item = &RuleTrace> {
        self.steps.iter().filter_map(|step| match step {
            TraceStep::Evaluated(rule) => Some(rule),
            TraceStep::NotEvaluated => None,
        })
    }
}
