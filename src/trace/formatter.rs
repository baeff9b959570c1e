use super::{RuleSetTrace, RuleTrace};
use itertools::Itertools;

/// Formats evaluation traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a rule-set trace, leaving out rules skipped by short-circuiting.
    pub fn format_rule_set(trace: &RuleSetTrace) -> String {
        if trace.steps.is_empty() {
            return "no rules configured".to_string();
        }
        let separator = format!(" {} ", trace.combinator);
        trace.evaluated().map(Self::format_rule).join(&separator)
    }

    /// Format a single rule as `$field (was value) operator comparand`.
    pub fn format_rule(trace: &RuleTrace) -> String {
        let actual = match &trace.actual {
            Some(value) => format!("\"{}\"", value),
            None => "absent".to_string(),
        };
        if trace.operator.takes_value() {
            format!(
                "${} (was {}) {} \"{}\"",
                trace.field, actual, trace.operator, trace.expected
            )
        } else {
            format!("${} (was {}) {}", trace.field, actual, trace.operator)
        }
    }
}
