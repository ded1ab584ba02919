//! Operator registry
//!
//! Supported operators live in one compile-time table. Adding an operator means
//! adding a row here and a variant to [`OperatorKind`].

use crate::ast::{Node, OperatorKind};

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// One row of the operator table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub symbol: char,
    pub kind: OperatorKind,
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorSpec {
    /// Build the operator node for this row
    pub fn create_node(&self, left: Node, right: Node) -> Node {
        Node::operator(self.kind, left, right)
    }
}

// Precedence numbers follow the usual C-family ordering (multiplicative binds tighter).
static OPERATORS: [OperatorSpec; 4] = [
    OperatorSpec {
        symbol: '+',
        kind: OperatorKind::Add,
        precedence: 12,
        associativity: Associativity::Left,
    },
    OperatorSpec {
        symbol: '-',
        kind: OperatorKind::Subtract,
        precedence: 12,
        associativity: Associativity::Left,
    },
    OperatorSpec {
        symbol: '*',
        kind: OperatorKind::Multiply,
        precedence: 13,
        associativity: Associativity::Left,
    },
    OperatorSpec {
        symbol: '/',
        kind: OperatorKind::Divide,
        precedence: 13,
        associativity: Associativity::Left,
    },
];

/// Find the table row for an operator character
pub fn lookup(ch: char) -> Option<&'static OperatorSpec> {
    OPERATORS.iter().find(|spec| spec.symbol == ch)
}

/// Check whether a character is a supported operator
pub fn is_operator(ch: char) -> bool {
    lookup(ch).is_some()
}

/// Precedence of an operator character (higher binds tighter)
pub fn precedence(ch: char) -> Option<u8> {
    lookup(ch).map(|spec| spec.precedence)
}

/// Associativity of an operator character
pub fn associativity(ch: char) -> Option<Associativity> {
    lookup(ch).map(|spec| spec.associativity)
}

/// Whether two operator characters share a precedence level
///
/// Returns `false` if either character is not an operator.
pub fn same_precedence(a: char, b: char) -> bool {
    match (precedence(a), precedence(b)) {
        (Some(pa), Some(pb)) => pa == pb,
        _ => false,
    }
}
