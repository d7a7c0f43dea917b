//! Property-based tests for the compiler and the stack machine.
//!
//! Random well-formed statements must compile, evaluate deterministically and
//! compile to the same program every time. Single binary operations must
//! agree with native `f64` arithmetic.

use proptest::prelude::*;
use revpol::{Variables, instruction::Operator, parse};

const NAMES: [&str; 4] = ["x", "y", "a", "b"];

fn bindings() -> Variables {
    Variables::from_pairs([("x", 2.0), ("y", -3.5), ("a", 0.25), ("b", 10.0)]).unwrap()
}

/// Bit-level equality that also treats any two NaNs as equal.
fn same_value(left: f64, right: f64) -> bool {
    left.to_bits() == right.to_bits() || (left.is_nan() && right.is_nan())
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![(0u32..1000).prop_map(|n| n.to_string()),
                (0.0f64..1e4).prop_map(|n| n.to_string()),
                prop::sample::select(NAMES.to_vec()).prop_map(str::to_string),
                Just("PI".to_string()),]
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(Operator::ALL.iter().map(|op| op.symbol()).collect::<Vec<_>>())
}

/// Generates well-formed statements with groups, signs and builtin calls.
fn statement_strategy() -> impl Strategy<Value = String> {
    operand_strategy().prop_recursive(4, 32, 3, |inner| {
                          prop_oneof![(inner.clone(), operator_strategy(), inner.clone())
                                          .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                                      inner.clone().prop_map(|e| format!("({e})")),
                                      inner.clone().prop_map(|e| format!("(-({e}))")),
                                      inner.clone().prop_map(|e| format!("abs({e})")),
                                      (inner.clone(), inner.clone())
                                          .prop_map(|(l, r)| format!("pow({l}, {r})")),
                                      prop::collection::vec(inner, 1..4)
                                          .prop_map(|args| format!("max({})", args.join(", "))),]
                      })
}

proptest! {
    #[test]
    fn well_formed_statements_compile(statement in statement_strategy()) {
        prop_assert!(parse(&statement).is_ok(), "{statement:?} was rejected");
    }

    #[test]
    fn evaluation_is_deterministic(statement in statement_strategy()) {
        let expr = parse(&statement).unwrap();
        let vars = bindings();

        let first = expr.evaluate(&vars).unwrap();
        let second = expr.evaluate(&vars).unwrap();
        prop_assert!(same_value(first, second), "{statement:?}: {first} then {second}");
    }

    #[test]
    fn reparsing_is_stable(statement in statement_strategy()) {
        let first = parse(&statement).unwrap();
        let second = parse(&statement).unwrap();

        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_variable_is_listed(statement in statement_strategy()) {
        let expr = parse(&statement).unwrap();

        for name in expr.variables() {
            prop_assert!(NAMES.contains(&name), "unexpected variable {name:?}");
        }
    }

    #[test]
    fn binary_operations_match_native_arithmetic(left in 0.0f64..1e6,
                                                 right in 0.0f64..1e3,
                                                 op in prop::sample::select(Operator::ALL.to_vec())) {
        let statement = format!("{left} {} {right}", op.symbol());
        let actual = parse(&statement).unwrap().evaluate(&()).unwrap();
        let expected = match op {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Rem => left % right,
            Operator::Pow => left.powf(right),
        };

        prop_assert!(same_value(actual, expected), "{statement}: {actual} != {expected}");
    }

    #[test]
    fn sign_negates(value in 0.0f64..1e9) {
        let actual = parse(&format!("-{value}")).unwrap().evaluate(&()).unwrap();

        prop_assert!(same_value(actual, 0.0 - value));
    }
}
