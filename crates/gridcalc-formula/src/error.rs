//! Formula error types

use std::fmt;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Which parenthesis an unbalanced expression has too many of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// More `(` than `)`
    Open,
    /// More `)` than `(`
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paren::Open => write!(f, "more '(' than ')'"),
            Paren::Close => write!(f, "more ')' than '('"),
        }
    }
}

/// Errors that can occur during expression parsing, binding or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The expression contains no operator character
    #[error("the expression \"{0}\" does not contain a valid operator")]
    NoOperator(String),

    /// Parentheses do not pair up
    #[error("the expression \"{expression}\" has {excess} and is therefore invalid")]
    UnbalancedParenthesis { expression: String, excess: Paren },

    /// A non-numeric operand that fails the variable name grammar
    #[error("the variable \"{0}\" is of the wrong format")]
    InvalidVariableName(String),

    /// Operators and operands that do not pair up (e.g. `-5+3`, `1+`, `2(3+4)`)
    #[error("the expression \"{0}\" is malformed: operators and operands do not pair up")]
    MalformedExpression(String),

    /// Operators nest deeper than the parser accepts
    #[error("the expression \"{expression}\" nests operators deeper than {limit} levels")]
    TooDeep { expression: String, limit: usize },

    /// Binding a variable that the expression never mentioned
    #[error("the variable \"{0}\" does not exist in the current expression")]
    UnknownVariable(String),

    /// Evaluating before a referenced variable was bound
    #[error("the variable \"{0}\" is not instantiated")]
    UnsetVariable(String),
}
