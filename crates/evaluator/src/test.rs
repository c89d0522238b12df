use errors::{CalcError, EvalError};
use expr::WithSpan;
use insta::assert_snapshot;
use tokenizer::tokenize;

use crate::{evaluate, run_on_line};

fn e(s: &str) -> String {
    match run_on_line(s) {
        Ok(value) => value.pretty_string(0),
        Err(CalcError::TokenizeError(_)) => "tokenizing failed".to_string(),
        Err(CalcError::EvalError(error)) => error.to_string(),
    }
}

#[test]
fn test() {
    assert_snapshot!(e("5 + 1"), @"6 0..5 [number]");
    assert_snapshot!(e("5 - 1"), @"4 0..5 [number]");
    assert_snapshot!(e("5 x 2"), @"10 0..5 [number]");
    assert_snapshot!(e("10 / 2"), @"5 0..6 [number]");
    assert_snapshot!(e("3 x 2 + 6 / 3"), @"8 0..13 [number]");
    assert_snapshot!(e("8 / 4 / 2"), @"1 0..9 [number]");
    assert_snapshot!(e("2 x 3 x 4"), @"24 0..9 [number]");
    assert_snapshot!(e("1 + 2 x 3"), @"7 0..9 [number]");
    assert_snapshot!(e("10 - 2 - 3"), @"5 0..10 [number]");
    assert_snapshot!(e("-7 / 2"), @"-3 0..6 [number]");
    assert_snapshot!(e("5"), @"5 0..1 [number]");
    assert_snapshot!(e("4 / 0"), @"division by zero");
    assert_snapshot!(e("3 $ 2"), @"unknown operator");
    assert_snapshot!(e(""), @"malformed expression");
    assert_snapshot!(e("3 +"), @"malformed expression");
    assert_snapshot!(e("+ 3"), @"malformed expression");
    assert_snapshot!(e("3 + + 3"), @"malformed expression");
}

#[test]
fn test_determinism() {
    let tokens = tokenize("3 x 2 + 6 / 3").unwrap();

    assert_eq!(evaluate(&tokens), evaluate(&tokens));
}

#[test]
fn test_division_by_zero_spans() {
    match run_on_line("4 / 0") {
        Err(CalcError::EvalError(EvalError::DivisionByZero(e))) => {
            assert_eq!((e.op_start, e.op_end), (2, 3));
            assert_eq!((e.divisor_start, e.divisor_end), (4, 5));
        }
        other => panic!("expected division by zero, got {other:?}"),
    }
}

#[test]
fn test_unknown_operator_names_the_symbol() {
    match run_on_line("3 $ 2") {
        Err(CalcError::EvalError(EvalError::UnknownOperator(e))) => {
            assert_eq!(e.symbol, "$");
            assert_eq!((e.start, e.end), (2, 3));
        }
        other => panic!("expected unknown operator, got {other:?}"),
    }
}

#[test]
fn test_overflow_is_an_error() {
    let too_big = format!("{} + 1", i64::MAX);
    assert!(matches!(
        run_on_line(too_big),
        Err(CalcError::EvalError(EvalError::Overflow(_)))
    ));

    // the one division that would panic unchecked
    let min_by_minus_one = format!("{} / -1", i64::MIN);
    assert!(matches!(
        run_on_line(min_by_minus_one),
        Err(CalcError::EvalError(EvalError::Overflow(_)))
    ));
}

#[test]
fn test_malformed_shapes() {
    let lines = ["", "   ", "+", "3 +", "+ 3", "3 + + 3", "3 3", "3 + 2 -"];

    for line in lines {
        assert!(
            matches!(
                run_on_line(line),
                Err(CalcError::EvalError(EvalError::Malformed(_)))
            ),
            "line: {line:?}"
        );
    }
}

#[test]
fn test_reports_label_the_source_line() {
    let line = "4 / 0";
    let report = run_on_line(line).unwrap_err().to_report(line);
    assert!(report.contains("cannot divide by zero"));

    let line = "3 $ 2";
    let report = run_on_line(line).unwrap_err().to_report(line);
    assert!(report.contains("unknown operator"));
}
