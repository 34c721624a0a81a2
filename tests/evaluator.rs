use std::fs;

use reckon::{error::EvalError, evaluate, interpreter::token::Operator, util::num::format_number};
use walkdir::WalkDir;

#[test]
fn documentation_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs/src").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| {
                                             e.path().extension().is_some_and(|ext| ext == "md")
                                         })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_reckon_lines(&content) {
            count += 1;
            let (expression, expected) =
                line.rsplit_once('=')
                    .unwrap_or_else(|| panic!("Example {line:?} in {path:?} has no '='"));
            let expected = expected.trim();

            match (evaluate(expression), expected) {
                (Err(_), "error") => {},
                (Ok(value), _) => assert_eq!(format_number(value),
                                             expected,
                                             "Example {line:?} in {path:?} evaluated differently"),
                (Err(e), _) => panic!("Example {line:?} in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No reckon examples found in docs/src");
}

fn extract_reckon_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?} evaluated to {value}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

#[test]
fn mixed_precedence() {
    assert_evaluates("12+7*3-4/2", 31.0);
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("2*3+1", 7.0);
    assert_evaluates("20/4-1", 4.0);
}

#[test]
fn chained_high_precedence_is_left_to_right() {
    assert_evaluates("8/2*2", 8.0);
    assert_evaluates("8/4*2", 4.0);
    assert_evaluates("100/10/5", 2.0);
    assert_evaluates("2*3*4", 24.0);
}

#[test]
fn chained_low_precedence_is_left_to_right() {
    assert_evaluates("10-4-3", 3.0);
    assert_evaluates("10-4+3", 9.0);
}

#[test]
fn single_number_and_simple_sums() {
    assert_evaluates("3", 3.0);
    assert_evaluates("2+3", 5.0);
    assert_evaluates("2-3", -1.0);
    assert_evaluates("3.25", 3.25);
}

#[test]
fn high_then_low_matches_manual_grouping() {
    let operands = [0.5, 1.0, 3.0, 7.25, 12.0];

    for a in operands {
        for b in operands {
            for c in operands {
                for (high, high_symbol) in [(Operator::Mul, '*'), (Operator::Div, '/')] {
                    for (low, low_symbol) in [(Operator::Add, '+'), (Operator::Sub, '-')] {
                        let src = format!("{a}{high_symbol}{b}{low_symbol}{c}");
                        assert_evaluates(&src, low.apply(high.apply(a, b), c));
                    }
                }
            }
        }
    }
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_evaluates("1/0", f64::INFINITY);
    assert_evaluates("0-1/0", f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
    assert_evaluates("1/0-5", f64::INFINITY);
}

#[test]
fn malformed_numerals_are_nan() {
    assert!(evaluate(".").unwrap().is_nan());
    assert!(evaluate("..+2").unwrap().is_nan());
    assert_evaluates("1.5.5", 1.5);
    assert_evaluates("5.+1", 6.0);
}

#[test]
fn unrelated_characters_are_ignored() {
    assert_evaluates(" 2 + 3 ", 5.0);
    assert_evaluates("1 000+1", 1001.0);
    assert_evaluates("(2+3)", 5.0);
    assert_evaluates("a1b2c", 12.0);
    assert_evaluates("4\t*\n2", 8.0);
}

#[test]
fn leading_operator_is_an_error() {
    assert_eq!(evaluate("-3"),
               Err(EvalError::ExpectedNumber { found:    Operator::Sub,
                                               position: 0, }));
    assert_eq!(evaluate("*3"),
               Err(EvalError::MissingLeftOperand { operator: Operator::Mul,
                                                   position: 0, }));
}

#[test]
fn unary_minus_after_operator_is_an_error() {
    assert_eq!(evaluate("3*-2"),
               Err(EvalError::MissingRightOperand { operator: Operator::Mul,
                                                    position: 1, }));
    assert_eq!(evaluate("3+-2"),
               Err(EvalError::MissingRightOperand { operator: Operator::Add,
                                                    position: 1, }));
}

#[test]
fn trailing_operator_is_an_error() {
    assert_eq!(evaluate("2+"),
               Err(EvalError::MissingRightOperand { operator: Operator::Add,
                                                    position: 1, }));
    assert_eq!(evaluate("2/"),
               Err(EvalError::MissingRightOperand { operator: Operator::Div,
                                                    position: 1, }));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("abc"), Err(EvalError::EmptyExpression));
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["12+7*3-4/2", "8/4*2", "1/0", "3*-2", ""] {
        let first = evaluate(src);
        let second = evaluate(src);
        assert_eq!(first, second, "{src:?} changed between runs");
    }
}

#[test]
fn errors_describe_the_failure() {
    let e = evaluate("3*-2").unwrap_err();
    assert_eq!(e.to_string(), "Error at token 1: '*' has no right operand.");
}

#[test]
fn extreme_magnitudes_use_exponent_notation() {
    assert_eq!(format_number(evaluate("10000000000*1000000000000").unwrap()), "1e+22");
    assert_eq!(format_number(evaluate("1/10000000").unwrap()), "1e-7");
    assert_eq!(format_number(evaluate("123456789*1000").unwrap()), "123456789000");
    assert_eq!(format_number(evaluate("1/1000000").unwrap()), "0.000001");
}
