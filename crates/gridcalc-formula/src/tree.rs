//! Expression tree with a variable table

use crate::ast::Node;
use crate::error::{FormulaError, FormulaResult};
use crate::{evaluator, parser};
use ahash::AHashMap;
use std::fmt;
use std::str::FromStr;

/// A parsed expression plus the values bound to its variables
///
/// Construction is atomic: either the whole expression parses or an error is
/// returned and no tree exists. Every variable starts unset.
///
/// # Example
/// ```rust
/// use gridcalc_formula::{ExpressionTree, FormulaError};
///
/// let mut tree = ExpressionTree::parse("10+A1").unwrap();
/// assert_eq!(tree.evaluate(), Err(FormulaError::UnsetVariable("A1".into())));
///
/// tree.set_variable("A1", 4.0).unwrap();
/// assert_eq!(tree.evaluate().unwrap(), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    root: Node,
    variables: AHashMap<String, Option<f64>>,
    /// Variable names in order of first appearance
    order: Vec<String>,
}

impl ExpressionTree {
    /// Parse an infix expression
    pub fn parse(expression: &str) -> FormulaResult<Self> {
        let root = parser::parse(expression)?;

        let mut variables = AHashMap::new();
        let mut order = Vec::new();
        root.for_each_variable(&mut |name| {
            if !variables.contains_key(name) {
                variables.insert(name.to_string(), None);
                order.push(name.to_string());
            }
        });

        tracing::debug!(
            expression,
            variables = variables.len(),
            "parsed expression tree"
        );

        Ok(Self {
            root,
            variables,
            order,
        })
    }

    /// Bind a value to every occurrence of a variable
    pub fn set_variable(&mut self, name: &str, value: f64) -> FormulaResult<()> {
        let slot = self
            .variables
            .get_mut(name)
            .ok_or_else(|| FormulaError::UnknownVariable(name.to_string()))?;
        *slot = Some(value);
        evaluator::bind(&mut self.root, name, value);
        Ok(())
    }

    /// Evaluate the expression with the current bindings
    pub fn evaluate(&self) -> FormulaResult<f64> {
        evaluator::evaluate(&self.root)
    }

    /// Names of every variable in the expression
    ///
    /// Each name appears once, in the order it is first read left to right.
    pub fn variable_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Current binding of a variable
    ///
    /// `None` if the expression has no such variable, `Some(None)` if it is unset.
    pub fn variable(&self, name: &str) -> Option<Option<f64>> {
        self.variables.get(name).copied()
    }

    /// Whether a variable has been given a value
    pub fn is_bound(&self, name: &str) -> bool {
        matches!(self.variable(name), Some(Some(_)))
    }

    /// Root of the tree
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl FromStr for ExpressionTree {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
