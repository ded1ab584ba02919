//! Expression evaluator
//!
//! Evaluates [`Node`] trees to `f64` and pushes variable bindings into them.
//! Both walks recurse; parsed trees are at most [`MAX_DEPTH`](crate::parser::MAX_DEPTH)
//! levels deep.

use crate::ast::Node;
use crate::error::{FormulaError, FormulaResult};

/// Evaluate an expression tree
///
/// Arithmetic follows IEEE-754, so dividing by zero yields an infinity or NaN
/// rather than an error. The only failure is an unbound variable.
pub fn evaluate(node: &Node) -> FormulaResult<f64> {
    match node {
        Node::Constant(n) => Ok(*n),
        Node::Variable { name, value } => {
            value.ok_or_else(|| FormulaError::UnsetVariable(name.clone()))
        }
        Node::Operator { kind, left, right } => {
            let l = evaluate(left)?;
            let r = evaluate(right)?;
            Ok(kind.apply(l, r))
        }
    }
}

/// Set every variable node named `name` to `value`
///
/// Names are compared in full, so binding `A1` leaves `A12` untouched.
/// Returns the number of nodes updated.
pub fn bind(node: &mut Node, name: &str, value: f64) -> usize {
    match node {
        Node::Constant(_) => 0,
        Node::Variable {
            name: node_name,
            value: slot,
        } => {
            if node_name == name {
                *slot = Some(value);
                1
            } else {
                0
            }
        }
        Node::Operator { left, right, .. } => bind(left, name, value) + bind(right, name, value),
    }
}
