//! Sandboxed code execution and automated grading for coding exercises.
//!
//! This crate is the execution core of the CodeGrade platform: it takes
//! student-submitted source text in a declared language, runs it in an
//! isolated child process with a hard wall-clock limit, and, when grading,
//! evaluates test expressions against expected values using structural
//! equality. The surrounding application (catalog, enrollment, HTTP routing,
//! persistence) stays outside this crate and talks to it through two
//! operations: [`ScriptExecutor::execute`] and [`TestHarness::run_tests`].
//!
//! # Architecture Overview
//!
//! The pipeline is organized leaf-first:
//!
//! - **Value comparison**: recursive structural equality over JSON values
//! - **Sandbox wrapping**: per-language guard around the raw submission
//! - **Process running**: one child process per execution, piped output,
//!   timeout enforcement, guaranteed temp-file cleanup
//! - **Dispatch**: fixed language table mapping a tag to a wrapper/runner pair
//! - **Grading harness**: one probe program per test case, structured report
//!   parsing, independent per-case results
//!
//! Failures never escape as errors: every request produces a structured
//! result the caller can render, including for hostile or malformed input.

pub mod comparator;
pub mod config;
pub mod core_types;
pub mod errors;
pub mod executors;
pub mod harness;
pub mod sandbox;

pub use comparator::deep_equals;
pub use config::{ExecutorConfig, DEFAULT_TIMEOUT_MS};
pub use core_types::{ExecutionRequest, ExecutionResult, Language, TestCase, TestResult};
pub use errors::ExecutorError;
pub use executors::{CodeExecutor, ProcessRunner, ScriptExecutor};
pub use harness::TestHarness;
