use std::{collections::HashMap, fs, thread};

use pretty_assertions::assert_eq;
use revpol::{
    EvalError, Expression, Variables, calculate,
    error::ParseErrorKind,
    instruction::{Instruction, Operator},
    interpreter::evaluator::{core::execute, function::core::lookup},
    parse,
};
use walkdir::WalkDir;

/// Bindings shared by every case file.
fn case_bindings() -> Variables {
    Variables::from_pairs([("x", 2.0), ("y", 3.0), ("a", 4.0), ("b", 5.0)]).unwrap()
}

fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

#[test]
fn case_files_work() {
    let vars = case_bindings();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with("//") {
                continue;
            }
            let (statement, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", line_no + 1));
            let statement = statement.trim();
            let expected = expected.trim();
            count += 1;

            let result = calculate(statement, &vars);
            if expected == "error" {
                assert!(result.is_err(),
                        "{path:?}:{}: {statement:?} should fail but gave {result:?}",
                        line_no + 1);
                continue;
            }

            let expected: f64 = expected.parse()
                                        .unwrap_or_else(|_| {
                                            panic!("{path:?}:{}: bad expectation", line_no + 1)
                                        });
            match result {
                Ok(actual) => assert!(approx_eq(actual, expected),
                                      "{path:?}:{}: {statement:?} gave {actual}, expected \
                                       {expected}",
                                      line_no + 1),
                Err(e) => panic!("{path:?}:{}: {statement:?} failed: {e}", line_no + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_error_kind(statement: &str) -> ParseErrorKind {
    parse(statement).expect_err("statement should be rejected")
                    .kind()
                    .clone()
}

fn eval(statement: &str) -> f64 {
    parse(statement).unwrap().evaluate(&()).unwrap()
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("1+2*3"), 7.0);
    assert_eq!(eval("(1+2)*3"), 9.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);

    let expr = parse("2^3^2").unwrap();
    assert_eq!(expr.to_string(), "2 3 2 ^ ^");
}

#[test]
fn other_operators_are_left_associative() {
    assert_eq!(eval("8-3-2"), 3.0);
    assert_eq!(eval("64/4/2"), 8.0);
    assert_eq!(eval("17%5%2"), 0.0);
}

#[test]
fn unary_sign() {
    assert_eq!(eval("-3+5"), 2.0);
    assert_eq!(eval("+3"), 3.0);
    assert_eq!(eval("max(-1, -2)"), -1.0);
}

#[test]
fn sign_compiles_to_subtraction_from_zero() {
    let expr = parse("-x*2").unwrap();

    assert_eq!(expr.instructions(),
               &[Instruction::Number(0.0),
                 Instruction::Variable("x".to_string()),
                 Instruction::Number(2.0),
                 Instruction::Operator(Operator::Mul),
                 Instruction::Operator(Operator::Sub)]);
}

#[test]
fn function_calls_record_argument_counts() {
    let expr = parse("max(1, 2+3, x)").unwrap();
    let max = lookup("max").unwrap();

    assert_eq!(expr.instructions(),
               &[Instruction::Number(1.0),
                 Instruction::Number(2.0),
                 Instruction::Number(3.0),
                 Instruction::Operator(Operator::Add),
                 Instruction::Variable("x".to_string()),
                 Instruction::FunctionCall { function:  max,
                                             arg_count: 3, }]);
}

#[test]
fn function_arity_enforcement() {
    assert_eq!(parse_error_kind("pow(2)"),
               ParseErrorKind::ArgumentCount { function: "pow".to_string(),
                                               expected: 2,
                                               found:    1, });
    assert_eq!(parse_error_kind("sin(1, 2)"),
               ParseErrorKind::ArgumentCount { function: "sin".to_string(),
                                               expected: 1,
                                               found:    2, });
    assert_eq!(eval("max(1,5,3)"), 5.0);
    assert_eq!(eval("min(1,5,3)"), 1.0);
}

#[test]
fn clamp_normalizes_reversed_bounds() {
    assert_eq!(eval("clamp(5,10,0)"), 5.0);
    assert_eq!(eval("clamp(-1,0,10)"), 0.0);
    assert_eq!(eval("clamp(20,10,0)"), 10.0);
}

#[test]
fn reserved_names_cannot_be_bound() {
    let expr = parse("PI * r ^ 2").unwrap();

    let vars = HashMap::from([("PI".to_string(), 3.0), ("r".to_string(), 1.0)]);
    assert_eq!(expr.evaluate(&vars),
               Err(EvalError::ReservedName { name: "PI".to_string() }));

    let vars = HashMap::from([("sqrt", 1.0)]);
    assert_eq!(parse("1").unwrap().evaluate(&vars),
               Err(EvalError::ReservedName { name: "sqrt".to_string() }));

    assert!(Variables::new().with("rand", 0.5).is_err());
    assert!(Variables::new().with("E", 2.0).is_err());
}

#[test]
fn reserved_constants_ignore_lookup_callbacks() {
    let expr = parse("PI").unwrap();
    let value = expr.evaluate_with(|_| Some(3.0)).unwrap();

    assert_eq!(value, std::f64::consts::PI);
}

#[test]
fn unknown_variable_is_an_error_not_nan() {
    let expr = parse("x+1").unwrap();

    assert_eq!(expr.evaluate(&()),
               Err(EvalError::UnknownVariable { name: "x".to_string() }));
    assert_eq!(expr.evaluate_with(|_| None),
               Err(EvalError::UnknownVariable { name: "x".to_string() }));
    assert_eq!(expr.evaluate_with(|name| (name == "x").then_some(1.0)), Ok(2.0));
}

#[test]
fn malformed_input_is_rejected_with_positions() {
    let err = parse("(1+2").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::UnclosedParen);
    assert_eq!(err.index(), Some(0));

    let err = parse("max(1, (2").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::UnclosedParen);
    assert_eq!(err.index(), Some(7));

    let err = parse("1 2").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::OperatorExpected);
    assert_eq!(err.index(), Some(2));

    let err = parse(")").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::UnexpectedCloseParen);
    assert_eq!(err.index(), Some(0));

    let err = parse("1 +").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::TrailingOperator);
    assert_eq!(err.index(), None);
}

#[test]
fn error_kinds_cover_the_grammar() {
    assert_eq!(parse_error_kind("a $ b"),
               ParseErrorKind::IllegalCharacter { found: '$' });
    assert_eq!(parse_error_kind("1 ** 2"),
               ParseErrorKind::UnexpectedOperator { operator: '*' });
    assert_eq!(parse_error_kind("()"), ParseErrorKind::EmptyParentheses);
    assert_eq!(parse_error_kind("( )"), ParseErrorKind::EmptyParentheses);
    assert_eq!(parse_error_kind("max(1,)"), ParseErrorKind::UnexpectedCloseParen);
    assert_eq!(parse_error_kind("1,2"), ParseErrorKind::UnexpectedComma);
    assert_eq!(parse_error_kind("(1,2)"), ParseErrorKind::UnexpectedComma);
    assert_eq!(parse_error_kind("sin x"),
               ParseErrorKind::MissingOpenParen { function: "sin".to_string() });
    assert_eq!(parse_error_kind("3.1.4"),
               ParseErrorKind::InvalidNumber { literal: "3.1.4".to_string() });
}

#[test]
fn grammar_errors_are_reported_before_later_illegal_characters() {
    assert_eq!(parse_error_kind("1 2 $"), ParseErrorKind::OperatorExpected);
    assert_eq!(parse_error_kind("$ 1 2"),
               ParseErrorKind::IllegalCharacter { found: '$' });
}

#[test]
fn illegal_character_inside_a_run_wins_over_adjacency() {
    let err = parse("1 2$").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::IllegalCharacter { found: '$' });
    assert_eq!(err.index(), Some(3));

    let err = parse("x + y@z").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::IllegalCharacter { found: '@' });
    assert_eq!(err.index(), Some(5));

    assert_eq!(parse_error_kind("sin#(1)"),
               ParseErrorKind::IllegalCharacter { found: '#' });
}

#[test]
fn hand_built_call_with_wrong_arity_is_an_error() {
    let pow = lookup("pow").unwrap();
    let program = [Instruction::Number(2.0),
                   Instruction::FunctionCall { function:  pow,
                                               arg_count: 1, }];

    assert_eq!(execute(&program, &()), Err(EvalError::StackImbalance { depth: 1 }));

    let abs = lookup("abs").unwrap();
    let program = [Instruction::FunctionCall { function:  abs,
                                               arg_count: 0, }];
    assert_eq!(execute(&program, &()), Err(EvalError::StackImbalance { depth: 0 }));

    let max = lookup("max").unwrap();
    let program = [Instruction::FunctionCall { function:  max,
                                               arg_count: 0, }];
    assert!(execute(&program, &()).is_err());
}

#[test]
fn non_ascii_and_control_characters_are_rejected() {
    let err = parse("x + é").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::IllegalCharacter { found: 'é' });
    assert_eq!(err.index(), Some(4));

    assert_eq!(parse_error_kind("1\n+ 2"),
               ParseErrorKind::IllegalCharacter { found: '\n' });
}

#[test]
fn parse_error_display_points_at_the_offending_character() {
    let err = parse("1 + * 2").unwrap_err();

    assert_eq!(err.to_string(),
               "Error at index 4: Unexpected operator '*'.\n  1 + * 2\n      ^");
    assert_eq!(err.message(), "Unexpected operator '*'.");
}

#[test]
fn floating_point_domain_issues_are_not_errors() {
    assert!(eval("1/0").is_infinite());
    assert!(eval("5%0").is_nan());
    assert!(eval("sqrt(-1)").is_nan());
    assert_eq!(eval("ln(0)"), f64::NEG_INFINITY);
}

#[test]
fn empty_statement_evaluates_to_zero() {
    let expr = parse("   ").unwrap();

    assert!(expr.instructions().is_empty());
    assert_eq!(expr.evaluate(&()).unwrap(), 0.0);
}

#[test]
fn rand_is_fresh_per_occurrence_and_in_range() {
    let expr = parse("rand").unwrap();
    for _ in 0..100 {
        let value = expr.evaluate(&()).unwrap();
        assert!((0.0..1.0).contains(&value));
    }

    let values = (0..16).map(|_| expr.evaluate(&()).unwrap())
                        .collect::<Vec<_>>();
    assert!(values.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn repeated_evaluation_with_different_bindings() {
    let expr = parse("x * x - 1").unwrap();

    for i in 0..10 {
        let x = f64::from(i);
        let vars = Variables::new().with("x", x).unwrap();
        assert_eq!(expr.evaluate(&vars).unwrap(), x * x - 1.0);
    }
}

#[test]
fn reparsing_yields_identical_programs() {
    let statement = "clamp(x*2+1, 0, max(a,b)) - lerp(a, b, 0.5) ^ 2";
    let first = parse(statement).unwrap();
    let second: Expression = statement.parse().unwrap();

    assert_eq!(first, second);

    let vars = case_bindings();
    assert_eq!(first.evaluate(&vars).unwrap(), second.evaluate(&vars).unwrap());
}

#[test]
fn single_precision_and_merged_bindings() {
    let mut vars = Variables::new().with("w", 0.5_f32).unwrap();
    vars.merge(Variables::new().with("h", 4.0).unwrap()).unwrap();

    assert_eq!(calculate("w * h", &vars).unwrap(), 2.0);
    assert_eq!(vars.merge(Variables::new().with("w", 1.0).unwrap()),
               Err(EvalError::DuplicateVariable { name: "w".to_string() }));
}

#[test]
fn referenced_variables_are_listed_once() {
    let expr = parse("a + b * a - rand + E").unwrap();

    assert_eq!(expr.variables(), vec!["a", "b"]);
}

#[test]
fn expressions_evaluate_concurrently() {
    let expr = parse("x ^ 2 + max(x, 10)").unwrap();

    thread::scope(|scope| {
        let handles = (0..8).map(|i| {
                                let expr = &expr;
                                scope.spawn(move || {
                                         let x = f64::from(i);
                                         let vars = HashMap::from([("x", x)]);
                                         (x, expr.evaluate(&vars).unwrap())
                                     })
                            })
                            .collect::<Vec<_>>();

        for handle in handles {
            let (x, value) = handle.join().unwrap();
            assert_eq!(value, x * x + x.max(10.0));
        }
    });
}
