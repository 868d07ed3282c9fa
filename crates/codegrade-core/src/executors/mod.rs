//! Code execution environments for sandboxed runtime evaluation.
//!
//! Provides the dispatch layer for running untrusted submissions: a language
//! tag is resolved against a fixed table of sandbox profiles, the submission
//! is wrapped with the profile's guard, and the guarded source is executed in
//! a child interpreter process with a wall-clock limit. Every request yields
//! exactly one [`ExecutionResult`]; failures of any kind (unknown language,
//! missing interpreter, crash, timeout) come back as structured data, never as
//! an error the caller has to catch.

use async_trait::async_trait;

use crate::config::ExecutorConfig;
use crate::core_types::{ExecutionRequest, ExecutionResult, Language};
use crate::errors::ExecutorError;
use crate::sandbox;

pub mod process;

pub use process::ProcessRunner;

/// Seam between the grading harness and the execution pipeline. Implemented
/// by [`ScriptExecutor`] in production and by mocks in tests.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(&self, code: &str, language: &str) -> ExecutionResult;

    async fn execute_request(&self, request: &ExecutionRequest) -> ExecutionResult {
        self.execute(&request.code, &request.language).await
    }
}

/// Production executor: sandbox wrapper + child-process runner per language.
pub struct ScriptExecutor {
    runner: ProcessRunner,
    config: ExecutorConfig,
}

impl ScriptExecutor {
    pub fn new() -> Self {
        Self::with_config(ExecutorConfig::default())
    }

    pub fn with_config(config: ExecutorConfig) -> Self {
        Self {
            runner: ProcessRunner::new(config.clone()),
            config,
        }
    }

    /// Interpreter binary for a language: deployment override if configured,
    /// otherwise the profile default (resolved from `PATH` at spawn time).
    fn interpreter_for(&self, language: Language) -> &str {
        let profile = sandbox::profile_for(language);
        let override_binary = match language {
            Language::JavaScript => self.config.node_binary.as_deref(),
            Language::Python => self.config.python_binary.as_deref(),
        };
        override_binary.unwrap_or_else(|| profile.interpreter())
    }
}

impl Default for ScriptExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeExecutor for ScriptExecutor {
    async fn execute(&self, code: &str, language: &str) -> ExecutionResult {
        let resolved = match Language::from_tag(language) {
            Some(resolved) => resolved,
            None => {
                // Rejected before any side effect: no temp file, no process.
                let err = ExecutorError::UnsupportedLanguage(language.to_string());
                log::debug!("{}", err);
                return ExecutionResult::failure(err.to_string(), 0);
            }
        };

        log::debug!("dispatching {} submission ({} bytes)", resolved, code.len());
        let profile = sandbox::profile_for(resolved);
        let guarded = profile.wrap(code);
        self.runner
            .run(
                self.interpreter_for(resolved),
                &guarded,
                profile.file_extension(),
            )
            .await
    }
}
