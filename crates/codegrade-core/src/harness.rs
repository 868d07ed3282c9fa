//! Automated grading harness.
//!
//! For each test case the harness builds a probe program (the submission plus
//! a per-language epilogue that evaluates the test expression and prints one
//! JSON report line), runs it through the executor, and compares the reported
//! value against the expectation with [`deep_equals`]. Test cases run in
//! order but independently: a crash, a hostile submission, or an unparseable
//! probe report on one case never aborts the rest of the batch, and the
//! returned vector always has one entry per input case, in input order.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::comparator::deep_equals;
use crate::core_types::{Language, TestCase, TestResult};
use crate::executors::CodeExecutor;
use crate::sandbox;

/// The single structured line a probe prints on its stdout.
#[derive(Debug, Deserialize)]
struct ProbeReport {
    success: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

pub struct TestHarness {
    executor: Arc<dyn CodeExecutor>,
}

impl TestHarness {
    pub fn new(executor: Arc<dyn CodeExecutor>) -> Self {
        Self { executor }
    }

    /// Grades `code` against `tests`, returning exactly one [`TestResult`]
    /// per test case in input order.
    pub async fn run_tests(
        &self,
        code: &str,
        language: &str,
        tests: &[TestCase],
    ) -> Vec<TestResult> {
        let profile = match Language::from_tag(language) {
            Some(resolved) => sandbox::profile_for(resolved),
            None => {
                // The aggregate contract holds even for an unknown language:
                // every case gets a failed result instead of the batch erroring.
                return tests
                    .iter()
                    .map(|test| TestResult {
                        passed: false,
                        expected: test.expected.clone(),
                        actual: Value::String(format!(
                            "Error: Unsupported language: {language}"
                        )),
                        test_name: test.name.clone(),
                    })
                    .collect();
            }
        };

        let mut results = Vec::with_capacity(tests.len());
        for test in tests {
            let probe = profile.probe(code, &test.test_expression);
            let execution = self.executor.execute(&probe, language).await;

            // A probe that never reached its epilogue (spawn failure, timeout,
            // top-level crash) leaves no stdout; fall back to the error text
            // so the parse-failure result still says what happened.
            let raw = if execution.output.trim().is_empty() {
                execution.error.unwrap_or_default()
            } else {
                execution.output
            };
            results.push(evaluate(test, &raw));
        }
        results
    }
}

/// Parses the probe report out of `raw` and scores one test case.
fn evaluate(test: &TestCase, raw: &str) -> TestResult {
    let line = raw
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim();

    let report: ProbeReport = match serde_json::from_str(line) {
        Ok(report) => report,
        Err(_) => {
            return TestResult {
                passed: false,
                expected: test.expected.clone(),
                actual: Value::String(format!("Parse Error: {}", raw.trim())),
                test_name: test.name.clone(),
            };
        }
    };

    if !report.success {
        let message = report.error.unwrap_or_else(|| "unknown evaluation error".to_string());
        return TestResult {
            passed: false,
            expected: test.expected.clone(),
            actual: Value::String(format!("Error: {message}")),
            test_name: test.name.clone(),
        };
    }

    let actual = report.result.unwrap_or(Value::Null);
    TestResult {
        passed: deep_equals(&actual, &test.expected),
        expected: test.expected.clone(),
        actual,
        test_name: test.name.clone(),
    }
}
