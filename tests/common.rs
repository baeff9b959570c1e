//! Common test utilities for building condition nodes and bindings.
use bunki::prelude::*;

/// Builds a rule with a generated id from its field, operator and comparand.
#[allow(dead_code)]
pub fn rule(field: &str, operator: OperatorKind, value: &str) -> Rule {
    Rule::new(format!("{}-{}", field, operator), field, operator, value)
}

/// Builds bindings where every value is text.
#[allow(dead_code)]
pub fn text_bindings(pairs: &[(&str, &str)]) -> VariableBindings {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

/// Creates a simple-mode node.
///
/// Logic: `$age > 18 AND $country in_list "DE, AT, CH"`
#[allow(dead_code)]
pub fn create_eligibility_node() -> ConditionNode {
    ConditionNode::simple(RuleSet::new(
        Combinator::And,
        vec![
            Rule::new("r1", "age", OperatorKind::GreaterThan, "18"),
            Rule::new("r2", "country", OperatorKind::InList, "DE, AT, CH"),
        ],
    ))
}

/// Creates a multi-output node routing by experience level.
///
/// Outputs in order:
/// - `A` Senior: `$years > 9`
/// - `B` Mid: `$years > 2`
/// - `C` Junior: `$years is_not_empty`
#[allow(dead_code)]
pub fn create_seniority_node() -> ConditionNode {
    ConditionNode::multi_output(vec![
        Output::new("o1", "Senior", "A").with_rules(vec![Rule::new(
            "r1",
            "years",
            OperatorKind::GreaterThan,
            "9",
        )]),
        Output::new("o2", "Mid", "B").with_rules(vec![Rule::new(
            "r2",
            "years",
            OperatorKind::GreaterThan,
            "2",
        )]),
        Output::new("o3", "Junior", "C").with_rules(vec![Rule::new(
            "r3",
            "years",
            OperatorKind::IsNotEmpty,
            "",
        )]),
    ])
}

/// The JSON form of `create_eligibility_node` as the flow editor stores it.
#[allow(dead_code)]
pub const EDITOR_SIMPLE_JSON: &str = r#"{
    "label": "Eligible?",
    "conditionMode": "simple",
    "conditions": {
        "operator": "and",
        "rules": [
            { "id": "r1", "variable": "age", "operator": "greater_than", "value": 18 },
            { "id": "r2", "variable": "country", "operator": "in_list", "value": "DE, AT, CH" }
        ]
    }
}"#;

/// A multi-output editor payload with one rule using an operator the engine does not know.
#[allow(dead_code)]
pub const EDITOR_MULTI_JSON: &str = r#"{
    "conditionMode": "multi-output",
    "outputs": [
        {
            "id": "o1",
            "label": "Regex",
            "value": "A",
            "conditions": [
                { "id": "r1", "field": "email", "operator": "matches_regex", "value": ".*@corp" }
            ]
        },
        {
            "id": "o2",
            "label": "Corporate",
            "value": "B",
            "rules": [
                { "id": "r2", "field": "email", "operator": "ends_with", "value": "@corp.example" }
            ]
        }
    ]
}"#;
