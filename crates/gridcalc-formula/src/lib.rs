//! # gridcalc-formula
//!
//! Expression parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - A fixed operator table (`+ - * /` with precedence and associativity)
//! - Operand classification (numeric literal or variable name)
//! - Infix parsing via the shunting-yard algorithm into an [`ExpressionTree`]
//! - Variable binding and evaluation
//! - Dependency tracking for recalculation
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_formula::ExpressionTree;
//!
//! let mut tree = ExpressionTree::parse("A1+A12*2").unwrap();
//! tree.set_variable("A1", 4.0).unwrap();
//! tree.set_variable("A12", 5.0).unwrap();
//! assert_eq!(tree.evaluate().unwrap(), 14.0);
//! ```

pub mod ast;
pub mod dependency;
pub mod error;
pub mod evaluator;
pub mod operand;
pub mod operator;
pub mod parser;
pub mod tree;

pub use ast::{Node, OperatorKind};
pub use dependency::DependencyGraph;
pub use error::{FormulaError, FormulaResult, Paren};
pub use evaluator::evaluate;
pub use operator::{Associativity, OperatorSpec};
pub use parser::{to_postfix, PostfixItem, MAX_DEPTH};
pub use tree::ExpressionTree;
