use std::{
    fs::{self},
    path::Path,
};

use exprtree::{Error, ExpressionParser, Value, get_result, parse, visit};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "cases"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(path, i + 1, line);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(path: &Path, line_number: usize, line: &str) {
    let (expression, expected) =
        line.rsplit_once("=>")
            .unwrap_or_else(|| panic!("{path:?}:{line_number}: missing '=>' in {line:?}"));
    let (expression, expected) = (expression.trim(), expected.trim());
    let result = get_result(expression);
    let location = format!("{path:?}:{line_number}: {expression}");

    match (expected, result) {
        ("syntax error", Err(Error::Syntax(_))) | ("evaluation error", Err(Error::Evaluation(_))) => {},
        ("true", Ok(Value::Boolean(true))) | ("false", Ok(Value::Boolean(false))) => {},
        ("NaN", Ok(Value::Number(n))) if n.is_nan() => {},
        ("inf", Ok(Value::Number(n))) if n == f64::INFINITY => {},
        ("-inf", Ok(Value::Number(n))) if n == f64::NEG_INFINITY => {},
        (expected, Ok(Value::Number(n))) => {
            let expected: f64 =
                expected.parse()
                        .unwrap_or_else(|_| panic!("{location}: expected {expected}, got {n}"));
            assert!(approx_eq(n, expected), "{location}: expected {expected}, got {n}");
        },
        (expected, got) => panic!("{location}: expected {expected}, got {got:?}"),
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn assert_number(src: &str, expected: f64) {
    match get_result(src) {
        Ok(Value::Number(n)) => {
            assert!(approx_eq(n, expected), "{src}: expected {expected}, got {n}");
        },
        other => panic!("{src}: expected {expected}, got {other:?}"),
    }
}

fn assert_boolean(src: &str, expected: bool) {
    match get_result(src) {
        Ok(Value::Boolean(b)) => assert_eq!(b, expected, "{src}"),
        other => panic!("{src}: expected {expected}, got {other:?}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src) {
        panic!("{src}: succeeded with {value} but was expected to fail")
    }
}

#[test]
fn precedence() {
    assert_number("2 + 3 * 4", 14.0);
    assert_number("(2 + 3) * 4", 20.0);
    assert_number("2 * 3 + 4 * 5", 26.0);
    assert_number("-2 * 3", -6.0);
    assert_boolean("1 + 1 == 2", true);
    assert_boolean("1 < 2 == 3 < 4", true);
}

#[test]
fn left_associativity() {
    assert_number("10 - 5 - 4", 1.0);
    assert_number("16 / 4 / 2", 2.0);
    assert_number("2 - 3 + 4", 3.0);
}

#[test]
fn logical_operators() {
    assert_boolean("true or false and false", true);
    assert_boolean("!true or true", true);
    assert_boolean("!(true or true)", false);
    assert_boolean("true and !false", true);
    assert_boolean("TRUE AnD False", false);
    assert_boolean("false Or tRuE", true);
}

#[test]
fn short_circuit_skips_the_right_operand() {
    // `x` names no constant and `1 + true` is ill-typed; neither is reached.
    assert_boolean("false and x", false);
    assert_boolean("true or x", true);
    assert_boolean("false and 1 + true > 0", false);

    assert_failure("true and x");
    assert_failure("false or x");
}

#[test]
fn conditional() {
    assert_number("5 > 4 ? 1 + 2 + 3 : 2 * 2", 6.0);
    assert_number("5 < 4 ? 1 : 2", 2.0);
    assert_number("false ? 1 : true ? 2 : 3", 2.0);
    assert_number("true ? false ? 1 : 2 : 3", 2.0);
    assert_boolean("1 < 2 ? true : false", true);
    // Only the chosen branch is evaluated.
    assert_number("true ? 1 : x", 1.0);
    assert_failure("1 ? 2 : 3");
}

#[test]
fn builtin_functions() {
    assert_number("log(exp((sin(PI/4)+cos(PI/4))/(sqrt(2)*tan(PI/4))))", 1.0);
    assert_number("sqrt(16)", 4.0);
    assert_number("log(E)", 1.0);
    assert_number("exp(0)", 1.0);
    assert_number("cos(0)", 1.0);
    assert_number("sin(0)", 0.0);
    assert_number("sqrt(sqrt(16))", 2.0);
}

#[test]
fn constants() {
    assert_number("PI", std::f64::consts::PI);
    assert_number("E", std::f64::consts::E);
    assert_failure("pi");
    assert_failure("e");
}

#[test]
fn user_functions() {
    let mut parser = ExpressionParser::new();
    parser.register_function("cube", |x| x * x * x);
    parser.register_function("atan", f64::atan);

    let tree = parser.parse("cube(2)").unwrap();
    assert_eq!(tree.evaluate().unwrap(), Value::Number(8.0));

    let tree = parser.parse("cube(2)*atan(tan(PI/8))/PI").unwrap();
    let Value::Number(n) = tree.evaluate().unwrap() else {
        panic!("expected a number")
    };
    assert!(approx_eq(n, 1.0));

    // Names are case-sensitive.
    assert!(parser.parse("CUBE(2)").is_err());
}

#[test]
fn malformed_input_is_a_syntax_error() {
    for src in ["(1 + 2", "1 +", "1 @ 2", "1 = 2", "sin 1", "", "   ", "unknown(1)", "1 2", ")"] {
        assert!(matches!(get_result(src), Err(Error::Syntax(_))), "{src:?} should not parse");
    }
}

#[test]
fn type_mismatch_is_an_evaluation_error() {
    for src in ["5 + true", "!1", "-true", "1 and true", "sin(true)", "1 == true", "x", "1 ? 2 : 3"] {
        assert!(parse(src).is_ok(), "{src:?} should parse");
        assert!(matches!(get_result(src), Err(Error::Evaluation(_))), "{src:?} should not evaluate");
    }
}

#[test]
fn ieee_edge_cases_are_not_errors() {
    assert_eq!(get_result("1/0").unwrap(), Value::Number(f64::INFINITY));
    assert_eq!(get_result("-1/0").unwrap(), Value::Number(f64::NEG_INFINITY));

    let Value::Number(n) = get_result("sqrt(-1)").unwrap() else {
        panic!("expected a number")
    };
    assert!(n.is_nan());

    assert_boolean("sqrt(-1) == sqrt(-1)", false);
    assert_boolean("sqrt(-1) != sqrt(-1)", true);
    assert_boolean("sqrt(-1) < 1", false);
}

#[test]
fn whitespace_is_insignificant() {
    assert_number("\t1\n+\r2 ", 3.0);
    assert_number("1+2*3", 7.0);
    assert_number("  ( 1 + 2 )  *  3  ", 9.0);
}

#[test]
fn numbers() {
    assert_number(".5 + 5.", 5.5);
    assert_number("007", 7.0);
    assert_number("0.1 + 0.2", 0.1 + 0.2);
    assert_failure(".");
    assert_failure("1.2.3");
}

#[test]
fn canonical_text() {
    assert_eq!(visit(&parse("1 + 2").unwrap()), "(1.0 + 2.0)");
    assert_eq!(visit(&parse("sin(PI)").unwrap()), "sin(PI)");
    assert_eq!(visit(&parse("a ? b : c").unwrap()), "(a ? b : c)");
    assert_eq!(visit(&parse("-(1 + 2)").unwrap()), "-(1.0 + 2.0)");
    assert_eq!(visit(&parse("!!TRUE").unwrap()), "!!true");
    assert_eq!(visit(&parse("1 and 2 or 3").unwrap()), "((1.0 and 2.0) or 3.0)");
    assert_eq!(visit(&parse("((((7))))").unwrap()), "7.0");
    assert_eq!(visit(&parse("0.250 <= E").unwrap()), "(0.25 <= E)");
}

#[test]
fn canonical_text_evaluates_identically() {
    let sources = ["2 + 3 * 4",
                   "10 - 5 - 4",
                   "true or false and false",
                   "5 > 4 ? 1 + 2 + 3 : 2 * 2",
                   "log(exp((sin(PI/4)+cos(PI/4))/(sqrt(2)*tan(PI/4))))",
                   "-(2 - -3) / 7",
                   "!(1 < 2) == false",
                   "0.1 + 0.2",
                   "1/0",
                   "12345678901234567890123 * 10"];

    for src in sources {
        let tree = parse(src).unwrap();
        let reparsed = parse(&visit(&tree)).unwrap();
        assert_eq!(reparsed.evaluate(), tree.evaluate(), "{src}");
    }
}
