//! Expression tree node types

use std::fmt;

/// Expression tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Numeric literal
    Constant(f64),

    /// Named variable; `None` until bound
    Variable { name: String, value: Option<f64> },

    /// Binary operation owning both operands
    Operator {
        kind: OperatorKind,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create an unbound variable node
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable {
            name: name.into(),
            value: None,
        }
    }

    /// Create an operator node from its two operands
    pub fn operator(kind: OperatorKind, left: Node, right: Node) -> Self {
        Node::Operator {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Visit every variable name in the subtree, left to right
    pub fn for_each_variable<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Node::Constant(_) => {}
            Node::Variable { name, .. } => f(name),
            Node::Operator { left, right, .. } => {
                left.for_each_variable(f);
                right.for_each_variable(f);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(n) => write!(f, "{}", n),
            Node::Variable { name, .. } => write!(f, "{}", name),
            Node::Operator { kind, left, right } => {
                write!(f, "({} {} {})", left, kind.symbol(), right)
            }
        }
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKind {
    /// The character this operator is written as
    pub fn symbol(self) -> char {
        match self {
            OperatorKind::Add => '+',
            OperatorKind::Subtract => '-',
            OperatorKind::Multiply => '*',
            OperatorKind::Divide => '/',
        }
    }

    /// Apply the operator with IEEE-754 semantics (x / 0 is infinite or NaN)
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            OperatorKind::Add => left + right,
            OperatorKind::Subtract => left - right,
            OperatorKind::Multiply => left * right,
            OperatorKind::Divide => left / right,
        }
    }
}
