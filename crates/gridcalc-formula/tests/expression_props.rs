//! Property tests for expression parsing and evaluation

use gridcalc_formula::{ExpressionTree, FormulaError};
use proptest::prelude::*;

fn eval(expression: &str) -> Result<f64, FormulaError> {
    ExpressionTree::parse(expression)?.evaluate()
}

proptest! {
    #[test]
    fn subtraction_is_left_associative(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let expected = (a as f64 - b as f64) - c as f64;
        prop_assert_eq!(eval(&format!("{a}-{b}-{c}")).unwrap(), expected);
    }

    #[test]
    fn division_is_left_associative(a in 0u32..10_000, b in 1u32..100, c in 1u32..100) {
        let expected = (a as f64 / b as f64) / c as f64;
        prop_assert_eq!(eval(&format!("{a}/{b}/{c}")).unwrap(), expected);
    }

    #[test]
    fn multiplication_binds_tighter(a in 0u32..1_000, b in 0u32..1_000, c in 0u32..1_000) {
        let expected = a as f64 + (b as f64 * c as f64);
        prop_assert_eq!(eval(&format!("{a}+{b}*{c}")).unwrap(), expected);
        prop_assert_eq!(eval(&format!("{b}*{c}+{a}")).unwrap(), expected);
    }

    #[test]
    fn redundant_parentheses_are_transparent(
        a in 0u32..1_000,
        b in 0u32..1_000,
        c in 0u32..1_000,
        depth in 1usize..5,
    ) {
        let open = "(".repeat(depth);
        let close = ")".repeat(depth);
        let plain = eval(&format!("{a}-{b}*{c}")).unwrap();
        let wrapped = eval(&format!("{open}{a}{close}-{open}{b}*{c}{close}")).unwrap();
        prop_assert_eq!(plain, wrapped);
    }

    #[test]
    fn grouping_overrides_precedence(a in 0u32..1_000, b in 0u32..1_000, c in 0u32..1_000) {
        let expected = (a as f64 + b as f64) * c as f64;
        prop_assert_eq!(eval(&format!("({a}+{b})*{c}")).unwrap(), expected);
    }

    #[test]
    fn bound_variables_match_literals(x in 0u32..10_000, y in 0u32..10_000) {
        let mut tree = ExpressionTree::parse("A1*2-B7").unwrap();
        tree.set_variable("A1", x as f64).unwrap();
        tree.set_variable("B7", y as f64).unwrap();
        prop_assert_eq!(tree.evaluate().unwrap(), eval(&format!("{x}*2-{y}")).unwrap());
    }

    #[test]
    fn unmatched_open_parenthesis_is_rejected(a in 0u32..1_000, b in 0u32..1_000, extra in 1usize..4) {
        let expression = format!("{}{a}+{b}", "(".repeat(extra));
        let is_unbalanced = matches!(
            ExpressionTree::parse(&expression),
            Err(FormulaError::UnbalancedParenthesis { .. })
        );
        prop_assert!(is_unbalanced);
    }
}
