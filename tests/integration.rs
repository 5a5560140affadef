use rust_calc::frontend::evaluate;

use regex::Regex;
use test_generator::test_resources;

/// Each line of a .calc file is an expression annotated with the outcome
/// we expect for it, either a value or a rendered error message:
///
///   3 + 4 * 2 // expect: 11
///   (1+2      // error: Error at end: unbalanced parentheses.
#[test_resources("tests/integration/**/*.calc")]
fn run_expression_file(filename: &str) {
    let contents = std::fs::read_to_string(filename).unwrap();
    let annotation = Regex::new(r"^(.*?)\s*// (expect|error): (.*)$").unwrap();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let captures = annotation
            .captures(line)
            .unwrap_or_else(|| panic!("{}:{}: unannotated line", filename, line_no + 1));
        let source = &captures[1];
        let expectation = &captures[3];

        match &captures[2] {
            "expect" => {
                let expected: f64 = expectation.parse().unwrap();
                let actual = evaluate(source).unwrap_or_else(|err| {
                    panic!("{}:{}: {}", filename, line_no + 1, err.render(source))
                });
                assert_eq!(
                    actual,
                    expected,
                    "{}:{}: `{}`",
                    filename,
                    line_no + 1,
                    source
                );
            }
            "error" => {
                let err = evaluate(source).expect_err(source);
                assert_eq!(
                    err.render(source),
                    expectation,
                    "{}:{}: `{}`",
                    filename,
                    line_no + 1,
                    source
                );
            }
            _ => unreachable!(),
        }
    }
}
