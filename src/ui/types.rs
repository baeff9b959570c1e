use crate::error::{ConversionError, DecodeError};
use crate::model::{
    Combinator, ConditionMode, ConditionNode, IntoCondition, OperatorKind, Output, Rule, RuleSet,
};
use serde::Deserialize;
use std::collections::HashSet;

/// A rule as the flow editor stores it. Operators are free-form strings.
#[derive(Debug, Deserialize, Clone)]
pub struct UiRule {
    pub id: String,
    #[serde(alias = "variable", alias = "variableName")]
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// The flat rule group of a simple-mode condition.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiRuleGroup {
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub rules: Vec<UiRule>,
}

/// An output path as the flow editor stores it.
#[derive(Debug, Deserialize, Clone)]
pub struct UiOutput {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default, alias = "conditions")]
    pub rules: Vec<UiRule>,
}

/// The `data` payload of a condition node in the flow editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiConditionData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "conditionMode")]
    pub mode: Option<String>,
    #[serde(default, alias = "conditions")]
    pub rule_group: UiRuleGroup,
    #[serde(default)]
    pub outputs: Vec<UiOutput>,
}

/// A condition node entry from the flow editor's node list.
#[derive(Debug, Deserialize)]
pub struct UiFlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub data: UiConditionData,
}

impl UiConditionData {
    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an editor payload and converts it in one step.
    pub fn parse_condition(json: &str) -> Result<ConditionNode, DecodeError> {
        Ok(Self::from_json_str(json)?.into_condition()?)
    }
}

fn parse_mode(mode: Option<&str>) -> Result<ConditionMode, ConversionError> {
    match mode {
        None | Some("simple") => Ok(ConditionMode::Simple),
        Some("multi-output") | Some("multi_output") | Some("multi") => {
            Ok(ConditionMode::MultiOutput)
        }
        Some(other) => Err(ConversionError::InvalidMode(other.to_string())),
    }
}

fn parse_combinator(operator: Option<&str>) -> Result<Combinator, ConversionError> {
    match operator.map(str::to_ascii_lowercase).as_deref() {
        None | Some("and") => Ok(Combinator::And),
        Some("or") => Ok(Combinator::Or),
        Some(other) => Err(ConversionError::ValidationError(format!(
            "unknown rule combinator '{}'",
            other
        ))),
    }
}

// Comparands are compared as text. Numbers typed into a numeric input arrive as JSON numbers.
fn value_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn convert_rules(rules: Vec<UiRule>, context: &str) -> Result<Vec<Rule>, ConversionError> {
    let mut seen = HashSet::new();
    rules
        .into_iter()
        .map(|rule| {
            if !seen.insert(rule.id.clone()) {
                return Err(ConversionError::ValidationError(format!(
                    "duplicate rule id '{}' in {}",
                    rule.id, context
                )));
            }
            // Unknown operators are kept and fail closed at evaluation time.
            let operator = rule
                .operator
                .parse::<OperatorKind>()
                .unwrap_or(OperatorKind::Unknown);
            Ok(Rule::new(rule.id, rule.field, operator, value_to_text(rule.value)))
        })
        .collect()
}

impl IntoCondition for UiConditionData {
    fn into_condition(self) -> Result<ConditionNode, ConversionError> {
        let mode = parse_mode(self.mode.as_deref())?;
        let rule_set = RuleSet::new(
            parse_combinator(self.rule_group.operator.as_deref())?,
            convert_rules(self.rule_group.rules, "the condition")?,
        );

        let mut seen_outputs = HashSet::new();
        let outputs = self
            .outputs
            .into_iter()
            .map(|output| {
                if !seen_outputs.insert(output.id.clone()) {
                    return Err(ConversionError::ValidationError(format!(
                        "duplicate output id '{}'",
                        output.id
                    )));
                }
                let context = format!("output '{}'", output.id);
                let rules = convert_rules(output.rules, &context)?;
                Ok(Output::new(output.id, output.label, output.value).with_rules(rules))
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;

        Ok(ConditionNode {
            mode,
            rule_set,
            outputs,
        })
    }
}

impl IntoCondition for UiFlowNode {
    fn into_condition(self) -> Result<ConditionNode, ConversionError> {
        if self.node_type != "condition" {
            return Err(ConversionError::ValidationError(format!(
                "node '{}' is a '{}' node, not a condition",
                self.id, self.node_type
            )));
        }
        self.data.into_condition()
    }
}
