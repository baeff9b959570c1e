use super::operators;
use crate::model::{Combinator, OperatorKind, Rule, RuleSet, VariableBindings};
use crate::trace::{RuleSetTrace, RuleTrace, TraceStep};

/// Evaluates one rule against the bindings. Never fails, an unusable rule is `false`.
pub fn evaluate_rule(rule: &Rule, bindings: &VariableBindings) -> bool {
    if rule.operator == OperatorKind::Unknown {
        tracing::warn!(rule_id = %rule.id, field = %rule.field, "rule has an unknown operator");
        return false;
    }
    let outcome = operators::apply(rule.operator, bindings.get(&rule.field), &rule.value);
    tracing::trace!(rule_id = %rule.id, operator = %rule.operator, outcome, "rule evaluated");
    outcome
}

/// Evaluates a rule-set with short-circuiting. No rules means `false` for either combinator.
pub fn evaluate_rule_set(rule_set: &RuleSet, bindings: &VariableBindings) -> bool {
    evaluate_rules(rule_set.operator, &rule_set.rules, bindings)
}

pub(crate) fn evaluate_rules(
    combinator: Combinator,
    rules: &[Rule],
    bindings: &VariableBindings,
) -> bool {
    if rules.is_empty() {
        return false;
    }
    match combinator {
        Combinator::And => rules.iter().all(|rule| evaluate_rule(rule, bindings)),
        Combinator::Or => rules.iter().any(|rule| evaluate_rule(rule, bindings)),
    }
}

/// Evaluates a rule and records what it saw.
pub fn trace_rule(rule: &Rule, bindings: &VariableBindings) -> RuleTrace {
    RuleTrace {
        rule_id: rule.id.clone(),
        field: rule.field.clone(),
        operator: rule.operator,
        expected: rule.value.clone(),
        actual: bindings
            .get(&rule.field)
            .and_then(|v| v.as_text())
            .map(|t| t.into_owned()),
        outcome: evaluate_rule(rule, bindings),
    }
}

/// Evaluates a rule-set and records every step, marking the rules skipped by short-circuiting.
pub fn trace_rule_set(rule_set: &RuleSet, bindings: &VariableBindings) -> RuleSetTrace {
    trace_rules(rule_set.operator, &rule_set.rules, bindings)
}

pub(crate) fn trace_rules(
    combinator: Combinator,
    rules: &[Rule],
    bindings: &VariableBindings,
) -> RuleSetTrace {
    // The value that ends evaluation early: a false under AND, a true under OR.
    let decisive = combinator == Combinator::Or;
    let mut steps = Vec::with_capacity(rules.len());
    let mut decided = false;

    for rule in rules {
        if decided {
            steps.push(TraceStep::NotEvaluated);
            continue;
        }
        let trace = trace_rule(rule, bindings);
        decided = trace.outcome == decisive;
        steps.push(TraceStep::Evaluated(trace));
    }

    let outcome = if rules.is_empty() {
        false
    } else if decided {
        decisive
    } else {
        !decisive
    };

    RuleSetTrace {
        combinator,
        steps,
        outcome,
    }
}
