//! Core type definitions for the execution and grading contract
//!
//! This module defines the data structures exchanged between the surrounding
//! application layer and the execution engine. The design keeps the wire shape
//! stable for JSON serialization so upstream endpoints can pass results through
//! unchanged: every type that crosses the boundary derives `Serialize` and
//! `Deserialize` with camelCase field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Languages with a registered sandbox profile.
///
/// The set is closed on purpose: dispatch is a fixed table, and anything not
/// in this enum is rejected before a process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
}

impl Language {
    /// Resolves a caller-supplied language tag, accepting the common aliases.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "javascript" | "js" | "node" | "nodejs" => Some(Language::JavaScript),
            "python" | "python3" | "py" => Some(Language::Python),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::JavaScript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
        }
    }
}

/// A single "run this code" request. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub code: String,
    pub language: String,
}

/// Outcome of one execution. Exactly one of these is produced per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: u64,
    /// Carried for wire compatibility; no measurement is taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<u64>,
}

impl ExecutionResult {
    /// A failed result with no captured stdout.
    pub fn failure(message: impl Into<String>, execution_time_ms: u64) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message.into()),
            execution_time_ms,
            memory_usage: None,
        }
    }
}

/// One grading probe: an expression evaluated against the submitted code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_expression: String,
    pub expected: Value,
    pub name: String,
}

/// Outcome of one test case, independent of its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub passed: bool,
    pub expected: Value,
    pub actual: Value,
    pub test_name: String,
}
