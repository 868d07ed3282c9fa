//! Error types for failure handling across the execution engine
//!
//! Every variant here is ultimately rendered into result data (`success` /
//! `passed` flags plus a message) at the public boundary: callers always get a
//! structured result back, including for malformed or hostile input. The enum
//! exists so internal plumbing can use `?` and still produce the exact message
//! taxonomy the surrounding application expects.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Failed to start interpreter '{interpreter}': {message}")]
    SpawnFailure {
        interpreter: String,
        message: String,
    },
    #[error("Execution timed out after {0} ms")]
    TimeoutExceeded(u64),
    #[error("Could not create temporary execution file: {0}")]
    TempFile(String),
    #[error("I/O error during execution: {0}")]
    Io(#[from] std::io::Error),
}
