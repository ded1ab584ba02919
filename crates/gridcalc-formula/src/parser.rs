//! Expression parser
//!
//! Converts an infix expression to postfix order with the shunting-yard
//! algorithm, then folds the postfix sequence into a [`Node`] tree.
//!
//! The parser does not strip whitespace; callers are expected to do that.
//!
//! Trees deeper than [`MAX_DEPTH`] are rejected. Every operator in a flat
//! left-associative chain such as `1+1+1` adds a level, so the limit also caps
//! the number of chained terms.

use crate::ast::Node;
use crate::error::{FormulaError, FormulaResult, Paren};
use crate::operand;
use crate::operator::{self, Associativity, OperatorSpec};

/// Deepest operator nesting a parsed tree may have
pub const MAX_DEPTH: usize = 512;

/// One element of a postfix sequence
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixItem {
    Operand(Node),
    Operator(&'static OperatorSpec),
}

/// Parse an infix expression into a tree
///
/// # Example
/// ```rust
/// use gridcalc_formula::parser::parse;
///
/// let root = parse("9*(10+4)/2").unwrap();
/// assert_eq!(root.to_string(), "((9 * (10 + 4)) / 2)");
/// ```
pub fn parse(expression: &str) -> FormulaResult<Node> {
    let postfix = to_postfix(expression)?;
    build_tree(postfix, expression)
}

/// Convert an infix expression to a postfix sequence
pub fn to_postfix(expression: &str) -> FormulaResult<Vec<PostfixItem>> {
    if !expression.chars().any(operator::is_operator) {
        return Err(FormulaError::NoOperator(expression.to_string()));
    }

    let mut stack: Vec<char> = Vec::new();
    let mut postfix = Vec::new();
    let mut operand = String::new();

    for c in expression.chars() {
        if c == '(' {
            flush_operand(&mut operand, &mut postfix)?;
            stack.push(c);
        } else if c == ')' {
            flush_operand(&mut operand, &mut postfix)?;
            loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => push_operator(op, &mut postfix),
                    None => {
                        return Err(FormulaError::UnbalancedParenthesis {
                            expression: expression.to_string(),
                            excess: Paren::Close,
                        })
                    }
                }
            }
        } else if operator::is_operator(c) {
            flush_operand(&mut operand, &mut postfix)?;
            while let Some(&top) = stack.last() {
                if !should_pop(top, c) {
                    break;
                }
                stack.pop();
                push_operator(top, &mut postfix);
            }
            stack.push(c);
        } else {
            operand.push(c);
        }
    }

    flush_operand(&mut operand, &mut postfix)?;

    while let Some(top) = stack.pop() {
        if top == '(' {
            return Err(FormulaError::UnbalancedParenthesis {
                expression: expression.to_string(),
                excess: Paren::Open,
            });
        }
        push_operator(top, &mut postfix);
    }

    Ok(postfix)
}

/// Fold a postfix sequence into a tree
///
/// Each operator pops its right operand first, then its left. Fails with
/// [`FormulaError::TooDeep`] once a subtree would exceed [`MAX_DEPTH`].
pub fn build_tree(postfix: Vec<PostfixItem>, expression: &str) -> FormulaResult<Node> {
    let malformed = || FormulaError::MalformedExpression(expression.to_string());
    // Each entry carries the operator depth of its subtree
    let mut stack: Vec<(Node, usize)> = Vec::with_capacity(postfix.len());

    for item in postfix {
        match item {
            PostfixItem::Operand(node) => stack.push((node, 0)),
            PostfixItem::Operator(spec) => {
                let (right, right_depth) = stack.pop().ok_or_else(malformed)?;
                let (left, left_depth) = stack.pop().ok_or_else(malformed)?;
                let depth = left_depth.max(right_depth) + 1;
                if depth > MAX_DEPTH {
                    return Err(FormulaError::TooDeep {
                        expression: expression.to_string(),
                        limit: MAX_DEPTH,
                    });
                }
                stack.push((spec.create_node(left, right), depth));
            }
        }
    }

    let (root, _) = stack.pop().ok_or_else(malformed)?;
    if !stack.is_empty() {
        return Err(malformed());
    }

    Ok(root)
}

/// Whether the operator on top of the stack must be emitted before `incoming` is pushed
fn should_pop(top: char, incoming: char) -> bool {
    match (operator::precedence(top), operator::precedence(incoming)) {
        (Some(top_precedence), Some(incoming_precedence)) => {
            top_precedence > incoming_precedence
                || (operator::same_precedence(top, incoming)
                    && operator::associativity(incoming) == Some(Associativity::Left))
        }
        _ => false,
    }
}

fn flush_operand(operand: &mut String, postfix: &mut Vec<PostfixItem>) -> FormulaResult<()> {
    if !operand.is_empty() {
        postfix.push(PostfixItem::Operand(operand::classify(operand)?));
        operand.clear();
    }
    Ok(())
}

fn push_operator(op: char, postfix: &mut Vec<PostfixItem>) {
    // Only operator characters are ever pushed besides '(' which callers filter out.
    if let Some(spec) = operator::lookup(op) {
        postfix.push(PostfixItem::Operator(spec));
    }
}
