use std::{fs, path::Path};

use glob::glob;
use itertools::Itertools;

use crate::problems::{PROBLEM_NAMES, run_by_name};

/// Runs the problem registered as `name` on `input` and returns everything it printed
pub fn solve(name: &str, input: &str) -> String {
    let mut output = Vec::new();
    run_by_name(name, input.as_bytes(), &mut output)
        .unwrap_or_else(|e| panic!("{name} failed: {e}"));
    String::from_utf8(output).expect("solvers print UTF-8")
}

fn normalized_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect_vec()
}

/// Compares line by line, ignoring surrounding whitespace and blank lines
pub fn assert_solves(name: &str, input: &str, expected: &str) {
    let output = solve(name, input);
    assert_eq!(
        normalized_lines(&output),
        normalized_lines(expected),
        "problem {name} on input:\n{input}"
    );
}

/// Every `samples/<problem>/<case>.in` comes with a `<case>.out` holding the expected answer
#[test]
fn samples() {
    let mut checked = 0;
    for path in glob("samples/*/*.in").expect("valid pattern").flatten() {
        let problem = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .expect("sample directory named after its problem");
        assert!(PROBLEM_NAMES.contains(&problem), "unknown sample directory {problem}");

        let input = fs::read_to_string(&path).expect("readable sample input");
        let expected = fs::read_to_string(path.with_extension("out")).expect("sample output exists");
        assert_solves(problem, &input, &expected);
        checked += 1;
    }
    assert!(checked > 0);
}
