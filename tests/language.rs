use std::fs;

use reckon::{
    Environment, EvalError,
    error::{ParseError, RuntimeError},
    evaluate_script, parse_and_evaluate,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_reckon_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut environment = Environment::new();
            for outcome in evaluate_script(&code, &mut environment) {
                if let Err(e) = outcome {
                    panic!("reckon example {} in {:?} failed:\n{}\nError: {:?}",
                           i + 1,
                           path,
                           code,
                           e);
                }
            }
        }
    }

    assert!(count > 0, "No reckon examples found in book/src");
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Evaluates `lines` in one session and returns the last result.
fn session(lines: &[&str]) -> Result<f64, EvalError> {
    let mut environment = Environment::new();
    let mut last = None;
    for line in lines {
        last = Some(parse_and_evaluate(line, &mut environment));
    }
    last.expect("at least one line")
}

fn assert_value(lines: &[&str], expected: f64) {
    match session(lines) {
        Ok(value) => assert_eq!(value, expected, "session {lines:?}"),
        Err(e) => panic!("Session {lines:?} failed: {e}"),
    }
}

fn assert_failure(lines: &[&str]) -> EvalError {
    match session(lines) {
        Ok(value) => panic!("Session {lines:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn digit_strings_evaluate_to_their_value() {
    for digits in ["0", "7", "42", "007", "1234567890", "9007199254740993"] {
        let expected: f64 = digits.parse().unwrap();
        assert_value(&[digits], expected);
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value(&["2 + 3 * 4"], 14.0);
    assert_value(&["(2 + 3) * 4"], 20.0);
    assert_value(&["2 * (3 + 4) * 5"], 70.0);
    assert_value(&["10 - 2 - 3"], 5.0);
    assert_value(&["100 / 10 / 5"], 2.0);
    assert_value(&["7 / 2"], 3.5);
}

#[test]
fn assignment_persists_across_lines() {
    assert_value(&["x = 5"], 5.0);
    assert_value(&["x = 5", "x + 1"], 6.0);
    assert_value(&["a = 3", "b = a * a", "b - a"], 6.0);
}

#[test]
fn reassignment_overwrites() {
    assert_value(&["x = 1", "x = 2", "x"], 2.0);
    assert_value(&["x = 1", "x = x + 1", "x = x * 10", "x"], 20.0);
}

#[test]
fn trailing_semicolon_is_optional() {
    assert_value(&["1 + 1;"], 2.0);
    assert_value(&["y = 4;", "y;"], 4.0);
}

#[test]
fn repeated_expression_is_stable() {
    let mut environment = Environment::new();
    parse_and_evaluate("k = 3", &mut environment).unwrap();

    let first = parse_and_evaluate("k * 7 / 2 - 1", &mut environment).unwrap();
    let second = parse_and_evaluate("k * 7 / 2 - 1", &mut environment).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn undefined_variable_is_error() {
    let err = assert_failure(&["y"]);
    assert!(matches!(err, EvalError::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "y"));
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure(&["1 / 0"]);
    assert!(matches!(err, EvalError::Runtime(RuntimeError::DivisionByZero { .. })));

    let err = assert_failure(&["z = 4", "8 / (z - 4)"]);
    assert!(matches!(err, EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn syntax_errors_are_distinguishable() {
    for line in ["3 +", "-5", "()", "(1 + 2", "5; garbage", "x = ", "= 3", ";"] {
        let err = assert_failure(&[line]);
        assert!(matches!(err, EvalError::Syntax(_)), "{line:?} gave {err:?}");
    }
}

#[test]
fn invalid_characters_are_lex_errors() {
    let err = assert_failure(&["2 $ 3"]);
    assert!(matches!(err, EvalError::Lex(_)));
    assert_eq!(err.position(), (1, 3));
    assert_eq!(err.to_string(), "Invalid character '$' at line 1, column 3");

    assert!(matches!(assert_failure(&["1.5"]), EvalError::Lex(_)));
}

#[test]
fn errors_leave_the_session_usable() {
    let mut environment = Environment::new();

    parse_and_evaluate("x = 10", &mut environment).unwrap();
    assert!(parse_and_evaluate("x = 1 / 0", &mut environment).is_err());
    assert!(parse_and_evaluate("x = (", &mut environment).is_err());
    assert!(parse_and_evaluate("x = @", &mut environment).is_err());
    assert_eq!(parse_and_evaluate("x", &mut environment), Ok(10.0));
}

#[test]
fn long_operator_chains_evaluate() {
    let sum = vec!["1"; 100_000].join("+");
    assert_value(&[sum.as_str()], 100_000.0);

    let product = vec!["1"; 100_000].join(" * ");
    assert_value(&[product.as_str()], 1.0);

    let mixed = vec!["x * 2 - x"; 50_000].join(" + ");
    assert_value(&["x = 3", mixed.as_str()], 150_000.0);
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let mut environment = Environment::new();
    parse_and_evaluate("kept = 1", &mut environment).unwrap();

    let line = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse_and_evaluate(&line, &mut environment).unwrap_err();

    assert!(matches!(err, EvalError::Syntax(ParseError::NestingTooDeep { .. })));
    assert_eq!(parse_and_evaluate("kept", &mut environment), Ok(1.0));
}

#[test]
fn first_failure_in_reading_order_wins() {
    let err = assert_failure(&["1 / 0 +"]);
    assert_eq!(err,
               EvalError::Runtime(RuntimeError::DivisionByZero { line:   1,
                                                                 column: 3, }));

    let err = assert_failure(&["y +"]);
    assert_eq!(err,
               EvalError::Runtime(RuntimeError::UndefinedVariable { name:   "y".to_string(),
                                                                    line:   1,
                                                                    column: 1, }));

    assert!(matches!(assert_failure(&["(y"]), EvalError::Runtime(_)));
    assert!(matches!(assert_failure(&["y 2"]), EvalError::Runtime(_)));
    assert!(matches!(assert_failure(&["x = 4 / (2 - 2) )"]), EvalError::Runtime(_)));

    assert!(matches!(assert_failure(&["+ y"]), EvalError::Syntax(_)));
    assert!(matches!(assert_failure(&["1 + ) / 0"]), EvalError::Syntax(_)));
    assert!(matches!(assert_failure(&["2 $ y"]), EvalError::Lex(_)));
}

#[test]
fn multi_line_input_reports_later_lines() {
    let mut environment = Environment::new();
    let err = parse_and_evaluate("1 +\n(2 *\n  )", &mut environment).unwrap_err();

    assert!(matches!(err, EvalError::Syntax(_)));
    assert_eq!(err.position(), (3, 3));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut environment = Environment::new();
    let outcomes = evaluate_script(&script, &mut environment);

    assert!(outcomes.iter().all(Result::is_ok), "{outcomes:?}");
    assert_eq!(outcomes.last(), Some(&Ok(1150.0)));
    assert_eq!(environment.get("interest"), Some(150.0));
}
