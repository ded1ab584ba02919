//! Operand classification

use crate::ast::Node;
use crate::error::{FormulaError, FormulaResult};

/// Classify an operand token as a constant or a variable
///
/// Tokens starting with a digit or `.` that parse as a float become constants.
/// Everything else must satisfy the variable name grammar: a letter followed by
/// letters or digits.
///
/// # Example
/// ```rust
/// use gridcalc_formula::{operand::classify, Node};
///
/// assert_eq!(classify("2.5").unwrap(), Node::Constant(2.5));
/// assert_eq!(classify("B12").unwrap(), Node::variable("B12"));
/// assert!(classify("A~").is_err());
/// ```
pub fn classify(token: &str) -> FormulaResult<Node> {
    if looks_numeric(token) {
        if let Ok(value) = token.parse::<f64>() {
            return Ok(Node::Constant(value));
        }
    }

    if is_valid_variable_name(token) {
        Ok(Node::variable(token))
    } else {
        Err(FormulaError::InvalidVariableName(token.to_string()))
    }
}

/// Check the variable grammar: first char a letter, the rest letters or digits
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(|c| c.is_alphanumeric()),
        _ => false,
    }
}

// Keeps `inf`/`NaN` spellings out of the literal path; those are variable names.
fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || c == '.')
}
