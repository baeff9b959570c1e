use super::ConditionNode;
use crate::error::ConversionError;

/// A trait for editor or storage payloads that can be turned into a `ConditionNode`.
///
/// This is the extension point for feeding the engine from whatever shape the
/// surrounding flow store keeps its decision nodes in.
///
/// # Example
///
/// ```rust,no_run
/// use bunki::error::ConversionError;
/// use bunki::model::{Combinator, ConditionNode, IntoCondition, Rule, RuleSet};
///
/// struct StoredDecision { rules: Vec<(String, String, String)> }
///
/// impl IntoCondition for StoredDecision {
///     fn into_condition(self) -> Result<ConditionNode, ConversionError> {
///         let rules = self
///             .rules
///             .into_iter()
///             .enumerate()
///             .map(|(i, (field, op, value))| {
///                 Rule::new(format!("rule-{}", i + 1), field, op.parse().unwrap(), value)
///             })
///             .collect();
///         Ok(ConditionNode::simple(RuleSet::new(Combinator::And, rules)))
///     }
/// }
/// ```
pub trait IntoCondition {
    /// Consumes the payload and converts it into a condition node.
    fn into_condition(self) -> Result<ConditionNode, ConversionError>;
}

impl IntoCondition for ConditionNode {
    fn into_condition(self) -> Result<ConditionNode, ConversionError> {
        Ok(self)
    }
}
