//! Tests for the pure editing operations and mode switching.
mod common;
use bunki::prelude::*;
use common::*;

#[test]
fn test_new_node_is_empty_simple() {
    let node = ConditionNode::new();
    assert_eq!(node.mode, ConditionMode::Simple);
    assert!(node.rule_set.rules.is_empty());
    assert!(node.outputs.is_empty());
    assert!(!evaluate_condition(&node, &VariableBindings::new()).matched);
}

#[test]
fn test_add_update_delete_rule() {
    let node = ConditionNode::new()
        .add_rule(Rule::new("r1", "age", OperatorKind::Equals, "30"))
        .unwrap()
        .update_rule(
            "r1",
            RulePatch {
                operator: Some(OperatorKind::GreaterThan),
                value: Some("18".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let rule = &node.rule_set.rules[0];
    assert_eq!(rule.field, "age");
    assert_eq!(rule.operator, OperatorKind::GreaterThan);
    assert_eq!(rule.value, "18");
    assert!(evaluate_condition(&node, &text_bindings(&[("age", "20")])).matched);

    let node = node.delete_rule("r1").unwrap();
    assert!(node.rule_set.rules.is_empty());
}

#[test]
fn test_rule_ids_stay_unique() {
    let node = ConditionNode::new()
        .add_rule(Rule::new("r1", "a", OperatorKind::Equals, "1"))
        .unwrap();
    let err = node
        .clone()
        .add_rule(Rule::new("r1", "b", OperatorKind::Equals, "2"))
        .unwrap_err();
    assert_eq!(err, EditError::DuplicateId("r1".to_string()));
}

#[test]
fn test_add_output_rejects_duplicate_rule_ids() {
    let output = Output::new("o1", "X", "A").with_rules(vec![
        Rule::new("r1", "a", OperatorKind::Equals, "1"),
        Rule::new("r1", "b", OperatorKind::Equals, "2"),
    ]);
    let node = ConditionNode::new().switch_mode(ConditionMode::MultiOutput);

    assert_eq!(
        node.clone().add_output(output.clone()).unwrap_err(),
        EditError::DuplicateId("r1".to_string())
    );
    assert_eq!(
        node.apply(Edit::AddOutput { output }).unwrap_err(),
        EditError::DuplicateId("r1".to_string())
    );
}

#[test]
fn test_unknown_ids_are_reported() {
    let node = create_seniority_node();
    assert_eq!(
        node.clone().delete_rule("missing").unwrap_err(),
        EditError::RuleNotFound("missing".to_string())
    );
    assert_eq!(
        node.clone()
            .update_output("missing", OutputPatch::default())
            .unwrap_err(),
        EditError::OutputNotFound("missing".to_string())
    );
    assert_eq!(
        node.delete_output_rule("o1", "missing").unwrap_err(),
        EditError::RuleNotFound("missing".to_string())
    );
}

#[test]
fn test_output_editing_keeps_order() {
    let node = ConditionNode::new()
        .switch_mode(ConditionMode::MultiOutput)
        .add_output(Output::new("o2", "Second", "B"))
        .unwrap()
        .add_output_rule("output-1", Rule::new("r1", "x", OperatorKind::Equals, "1"))
        .unwrap()
        .add_output_rule("o2", Rule::new("r2", "x", OperatorKind::Equals, "1"))
        .unwrap()
        .update_output(
            "o2",
            OutputPatch {
                label: Some("Renamed".to_string()),
                value: None,
            },
        )
        .unwrap();

    let ids: Vec<&str> = node.outputs.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["output-1", "o2"]);
    assert_eq!(node.outputs[1].label, "Renamed");
    assert_eq!(node.outputs[1].value, "B");

    let result = evaluate_condition(&node, &text_bindings(&[("x", "1")]));
    assert_eq!(result.output.unwrap().id, "output-1");

    let node = node.delete_output("output-1").unwrap();
    let result = evaluate_condition(&node, &text_bindings(&[("x", "1")]));
    assert_eq!(result.output.unwrap().label, "Renamed");
}

#[test]
fn test_output_rule_update() {
    let node = create_seniority_node()
        .update_output_rule(
            "o1",
            "r1",
            RulePatch {
                value: Some("20".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(node.outputs[0].rules[0].value, "20");
    let result = evaluate_condition(&node, &text_bindings(&[("years", "12")]));
    assert_eq!(result.output.unwrap().value, "B");
}

#[test]
fn test_simple_to_multi_seeds_one_output() {
    let simple = create_eligibility_node();
    let multi = simple.clone().switch_mode(ConditionMode::MultiOutput);

    assert_eq!(multi.mode, ConditionMode::MultiOutput);
    assert_eq!(multi.outputs.len(), 1);
    assert_eq!(multi.outputs[0].rules, simple.rule_set.rules);
    assert_eq!(multi.outputs[0].value, "A");
}

#[test]
fn test_simple_to_multi_keeps_existing_outputs() {
    let mut node = create_seniority_node();
    node.mode = ConditionMode::Simple;
    node.rule_set.rules = vec![Rule::new("s1", "x", OperatorKind::Equals, "1")];

    let multi = node.switch_mode(ConditionMode::MultiOutput);
    assert_eq!(multi.outputs.len(), 3);
    assert_eq!(multi.outputs[0].id, "o1");
}

#[test]
fn test_multi_to_simple_adopts_first_output() {
    let simple = create_seniority_node().switch_mode(ConditionMode::Simple);
    assert_eq!(simple.mode, ConditionMode::Simple);
    assert_eq!(simple.rule_set.rules.len(), 1);
    assert_eq!(simple.rule_set.rules[0].id, "r1");
    assert_eq!(simple.rule_set.rules[0].value, "9");
}

#[test]
fn test_multi_to_simple_without_outputs_keeps_flat_rules() {
    let mut node = create_eligibility_node();
    node.mode = ConditionMode::MultiOutput;
    let expected = node.rule_set.clone();

    let simple = node.switch_mode(ConditionMode::Simple);
    assert_eq!(simple.mode, ConditionMode::Simple);
    assert_eq!(simple.rule_set, expected);
}

#[test]
fn test_mode_round_trip_preserves_rules() {
    let mut original = create_eligibility_node();
    original.rule_set.operator = Combinator::Or;

    let back = original
        .clone()
        .switch_mode(ConditionMode::MultiOutput)
        .switch_mode(ConditionMode::Simple);

    assert_eq!(back.rule_set, original.rule_set);
    assert_eq!(back.mode, ConditionMode::Simple);
}

#[test]
fn test_switch_to_same_mode_is_noop() {
    let node = create_seniority_node();
    assert_eq!(node.clone().switch_mode(ConditionMode::MultiOutput), node);
}

#[test]
fn test_apply_edit_commands() {
    let edits: Vec<Edit> = serde_json::from_value(serde_json::json!([
        { "action": "add_rule", "rule": { "id": "r1", "field": "age", "operator": "greater_than", "value": "18" } },
        { "action": "add_rule", "rule": { "id": "r2", "field": "vip", "operator": "equals", "value": "yes" } },
        { "action": "set_combinator", "operator": "or" },
        { "action": "update_rule", "rule_id": "r2", "patch": { "value": "true" } }
    ]))
    .unwrap();

    let node = edits
        .into_iter()
        .try_fold(ConditionNode::new(), |node, edit| node.apply(edit))
        .unwrap();

    assert_eq!(node.rule_set.operator, Combinator::Or);
    assert_eq!(node.rule_set.rules[1].value, "true");
    assert!(evaluate_condition(&node, &text_bindings(&[("vip", "true")])).matched);
}

#[test]
fn test_session_allocates_fresh_ids() {
    let mut session = EditorSession::new();
    let node = ConditionNode::new()
        .add_rule(Rule::new("rule-1", "taken", OperatorKind::Equals, ""))
        .unwrap();

    let node = session.add_blank_rule(node, None).unwrap();
    let ids: Vec<&str> = node.rule_set.rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rule-1", "rule-2"]);
    assert_eq!(node.rule_set.rules[1].operator, OperatorKind::Equals);
}

#[test]
fn test_session_names_outputs_by_letter() {
    let mut session = EditorSession::new();
    let node = ConditionNode::new().switch_mode(ConditionMode::MultiOutput);
    let node = session.add_blank_output(node).unwrap();
    let node = session.add_blank_output(node).unwrap();

    let labels: Vec<(&str, &str, &str)> = node
        .outputs
        .iter()
        .map(|o| (o.id.as_str(), o.label.as_str(), o.value.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("output-1", "Output A", "A"),
            ("output-2", "Output B", "B"),
            ("output-3", "Output C", "C"),
        ]
    );

    let node = session.add_blank_rule(node, Some("output-2")).unwrap();
    assert_eq!(node.outputs[1].rules.len(), 1);
}

#[test]
fn test_session_does_not_reuse_letters_after_delete() {
    let mut session = EditorSession::new();
    let node = ConditionNode::new().switch_mode(ConditionMode::MultiOutput);
    let node = session.add_blank_output(node).unwrap();
    let node = session.add_blank_output(node).unwrap();
    let node = node.delete_output("output-2").unwrap();
    let node = session.add_blank_output(node).unwrap();

    let outputs: Vec<(&str, &str, &str)> = node
        .outputs
        .iter()
        .map(|o| (o.id.as_str(), o.label.as_str(), o.value.as_str()))
        .collect();
    assert_eq!(
        outputs,
        vec![
            ("output-1", "Output A", "A"),
            ("output-3", "Output C", "C"),
            ("output-4", "Output B", "B"),
        ]
    );
}

#[test]
fn test_session_skips_letters_taken_by_renamed_values() {
    let mut session = EditorSession::new();
    let node = ConditionNode::new()
        .switch_mode(ConditionMode::MultiOutput)
        .update_output(
            "output-1",
            OutputPatch {
                label: Some("Yes".to_string()),
                value: Some("B".to_string()),
            },
        )
        .unwrap();
    let node = session.add_blank_output(node).unwrap();
    assert_eq!(node.outputs[1].value, "A");
    let node = session.add_blank_output(node).unwrap();
    assert_eq!(node.outputs[2].value, "C");
}

#[test]
fn test_session_rejects_rules_for_inactive_part() {
    let mut session = EditorSession::new();

    let err = session
        .add_blank_rule(ConditionNode::new(), Some("output-1"))
        .unwrap_err();
    assert!(matches!(
        err,
        EditError::InactiveTarget {
            mode: ConditionMode::Simple,
            ..
        }
    ));

    let multi = ConditionNode::new().switch_mode(ConditionMode::MultiOutput);
    let err = session.add_blank_rule(multi.clone(), None).unwrap_err();
    assert!(matches!(
        err,
        EditError::InactiveTarget {
            mode: ConditionMode::MultiOutput,
            ..
        }
    ));

    assert_eq!(
        session.add_blank_rule(multi, Some("missing")).unwrap_err(),
        EditError::OutputNotFound("missing".to_string())
    );
}
