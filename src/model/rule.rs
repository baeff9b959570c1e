use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The comparison a rule applies between a bound variable and its comparand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
    InList,
    NotInList,
    /// Any operator name outside the known set. Always evaluates to `false`.
    #[serde(other)]
    Unknown,
}

impl OperatorKind {
    /// Every operator an editor can offer, in display order.
    pub const ALL: [OperatorKind; 12] = [
        OperatorKind::Equals,
        OperatorKind::NotEquals,
        OperatorKind::Contains,
        OperatorKind::NotContains,
        OperatorKind::StartsWith,
        OperatorKind::EndsWith,
        OperatorKind::GreaterThan,
        OperatorKind::LessThan,
        OperatorKind::IsEmpty,
        OperatorKind::IsNotEmpty,
        OperatorKind::InList,
        OperatorKind::NotInList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Equals => "equals",
            OperatorKind::NotEquals => "not_equals",
            OperatorKind::Contains => "contains",
            OperatorKind::NotContains => "not_contains",
            OperatorKind::StartsWith => "starts_with",
            OperatorKind::EndsWith => "ends_with",
            OperatorKind::GreaterThan => "greater_than",
            OperatorKind::LessThan => "less_than",
            OperatorKind::IsEmpty => "is_empty",
            OperatorKind::IsNotEmpty => "is_not_empty",
            OperatorKind::InList => "in_list",
            OperatorKind::NotInList => "not_in_list",
            OperatorKind::Unknown => "unknown",
        }
    }

    /// Whether the rule's `value` takes part in the comparison.
    pub fn takes_value(&self) -> bool {
        !matches!(self, OperatorKind::IsEmpty | OperatorKind::IsNotEmpty)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to `Unknown` rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OperatorKind::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .unwrap_or(OperatorKind::Unknown))
    }
}

/// How the rules of a rule-set are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "AND"),
            Combinator::Or => write!(f, "OR"),
        }
    }
}

/// A single comparison against one bound variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    /// Name of the variable to read from the bindings.
    pub field: String,
    pub operator: OperatorKind,
    /// Comparand. Ignored by `is_empty` and `is_not_empty`.
    #[serde(default)]
    pub value: String,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        operator: OperatorKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// An ordered sequence of rules joined by one combinator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub operator: Combinator,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(operator: Combinator, rules: Vec<Rule>) -> Self {
        Self { operator, rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
