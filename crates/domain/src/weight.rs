use std::sync::LazyLock;

use regex::Regex;

static BINARY_EXPRESSION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:[.,][0-9]+)?)([+\-*x×/])([0-9]+(?:[.,][0-9]+)?)$").ok()
});

static NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:[.,][0-9]+)?$").ok());

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Not a number or a simple arithmetic expression")]
    Malformed,
}

/// Evaluates what a user typed into a weight field.
///
/// Accepts a number or a single binary operation `<number><op><number>` with `op` being one of
/// `+ - * x × /`. Whitespace is ignored and a decimal comma is accepted. The result is rounded to
/// two decimal places.
pub fn evaluate_weight_expression(input: &str) -> Result<f64, WeightExpressionError> {
    let expression = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if expression.is_empty() {
        return Err(WeightExpressionError::Malformed);
    }

    if let Some(captures) = BINARY_EXPRESSION
        .as_ref()
        .and_then(|re| re.captures(&expression))
    {
        let lhs = parse_number(&captures[1])?;
        let rhs = parse_number(&captures[3])?;
        let result = match &captures[2] {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" | "x" | "×" => lhs * rhs,
            "/" => {
                if rhs == 0.0 {
                    return Err(WeightExpressionError::DivisionByZero);
                }
                lhs / rhs
            }
            _ => return Err(WeightExpressionError::Malformed),
        };
        return round_to_hundredths(result);
    }

    if NUMBER.as_ref().is_some_and(|re| re.is_match(&expression)) {
        return parse_number(&expression).and_then(round_to_hundredths);
    }

    Err(WeightExpressionError::Malformed)
}

fn parse_number(value: &str) -> Result<f64, WeightExpressionError> {
    value
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or(WeightExpressionError::Malformed)
}

fn round_to_hundredths(value: f64) -> Result<f64, WeightExpressionError> {
    Some((value * 100.0).round() / 100.0)
        .filter(|rounded| rounded.is_finite())
        .ok_or(WeightExpressionError::Malformed)
}
