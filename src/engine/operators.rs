use crate::model::{BindingValue, OperatorKind};

/// Applies `operator` to the bound value and the rule's comparand.
///
/// `actual` is `None` when the variable is not bound. Every branch is total,
/// anything that cannot be compared yields `false`.
pub(super) fn apply(operator: OperatorKind, actual: Option<&BindingValue>, expected: &str) -> bool {
    match operator {
        OperatorKind::Equals => equals(actual, expected),
        OperatorKind::NotEquals => !equals(actual, expected),
        OperatorKind::Contains => contains(actual, expected),
        OperatorKind::NotContains => !contains(actual, expected),
        OperatorKind::StartsWith => text_or_empty(actual).starts_with(expected),
        OperatorKind::EndsWith => text_or_empty(actual).ends_with(expected),
        OperatorKind::GreaterThan => compare_numbers(actual, expected, |a, b| a > b),
        OperatorKind::LessThan => compare_numbers(actual, expected, |a, b| a < b),
        OperatorKind::IsEmpty => is_empty(actual),
        OperatorKind::IsNotEmpty => !is_empty(actual),
        OperatorKind::InList => in_list(actual, expected),
        OperatorKind::NotInList => !in_list(actual, expected),
        OperatorKind::Unknown => false,
    }
}

fn present(actual: Option<&BindingValue>) -> Option<&BindingValue> {
    actual.filter(|v| !matches!(v, BindingValue::Null))
}

fn text_or_empty(actual: Option<&BindingValue>) -> String {
    present(actual)
        .and_then(|v| v.as_text())
        .map(|t| t.into_owned())
        .unwrap_or_default()
}

fn equals(actual: Option<&BindingValue>, expected: &str) -> bool {
    present(actual)
        .and_then(|v| v.as_text())
        .is_some_and(|text| text == expected)
}

fn contains(actual: Option<&BindingValue>, expected: &str) -> bool {
    match present(actual) {
        Some(BindingValue::List(items)) => items.iter().any(|item| item == expected),
        other => text_or_empty(other).contains(expected),
    }
}

fn is_empty(actual: Option<&BindingValue>) -> bool {
    actual.is_none_or(BindingValue::is_empty)
}

fn parse_number(text: &str) -> Option<f64> {
    // `inf` and `NaN` parse as f64 but are not numbers a user typed.
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn compare_numbers(
    actual: Option<&BindingValue>,
    expected: &str,
    cmp: impl Fn(f64, f64) -> bool,
) -> bool {
    let Some(lhs) = present(actual)
        .and_then(|v| v.as_text())
        .and_then(|t| parse_number(&t))
    else {
        return false;
    };
    let Some(rhs) = parse_number(expected) else {
        return false;
    };
    cmp(lhs, rhs)
}

fn in_list(actual: Option<&BindingValue>, expected: &str) -> bool {
    let tokens: Vec<&str> = expected.split(',').map(str::trim).collect();
    match present(actual) {
        None => false,
        Some(BindingValue::List(items)) => items.iter().any(|item| tokens.contains(&item.trim())),
        Some(value) => value
            .as_text()
            .is_some_and(|text| tokens.contains(&text.trim())),
    }
}
