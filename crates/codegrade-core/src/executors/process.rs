//! Child-process execution with a wall-clock limit and scoped temp artifacts.
//!
//! Each run gets its own temp directory holding a uniquely named script, so
//! concurrent executions never share state and collision avoidance needs no
//! locking. The directory is removed on every exit path: explicitly after the
//! process settles, and by `TempDir`'s drop as a backstop. Removal failures
//! are logged and never alter the reported result.

use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use uuid::Uuid;

use crate::config::ExecutorConfig;
use crate::core_types::ExecutionResult;
use crate::errors::ExecutorError;

pub struct ProcessRunner {
    config: ExecutorConfig,
}

impl ProcessRunner {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    /// Writes `source` to a fresh temp script and executes it with
    /// `interpreter`, returning a result for every outcome: normal exit,
    /// non-zero exit, stderr output, spawn failure, or timeout.
    pub async fn run(&self, interpreter: &str, source: &str, extension: &str) -> ExecutionResult {
        let started = Instant::now();
        match self.run_guarded(interpreter, source, extension, &started).await {
            Ok(result) => result,
            Err(err) => {
                log::debug!("execution failed before process exit: {}", err);
                ExecutionResult::failure(err.to_string(), elapsed_ms(&started))
            }
        }
    }

    async fn run_guarded(
        &self,
        interpreter: &str,
        source: &str,
        extension: &str,
        started: &Instant,
    ) -> Result<ExecutionResult, ExecutorError> {
        let temp_dir = match &self.config.temp_root {
            Some(root) => tempfile::Builder::new().prefix("codegrade-").tempdir_in(root),
            None => tempfile::Builder::new().prefix("codegrade-").tempdir(),
        }
        .map_err(|err| ExecutorError::TempFile(err.to_string()))?;

        let script_path = temp_dir
            .path()
            .join(format!("script_{}.{}", Uuid::new_v4(), extension));
        tokio::fs::write(&script_path, source).await?;

        let result = self.spawn_and_wait(interpreter, &script_path, started).await;

        // Cleanup runs for success, failure and timeout alike; best effort.
        if let Err(err) = temp_dir.close() {
            log::warn!("failed to remove temp execution dir: {}", err);
        }

        result
    }

    async fn spawn_and_wait(
        &self,
        interpreter: &str,
        script_path: &std::path::Path,
        started: &Instant,
    ) -> Result<ExecutionResult, ExecutorError> {
        let binary =
            which::which(interpreter).map_err(|err| ExecutorError::SpawnFailure {
                interpreter: interpreter.to_string(),
                message: err.to_string(),
            })?;

        let child = Command::new(binary)
            .arg(script_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| ExecutorError::SpawnFailure {
                interpreter: interpreter.to_string(),
                message: err.to_string(),
            })?;

        // Dropping the wait future on timeout kills the child (kill_on_drop).
        let waited = tokio::time::timeout(self.config.timeout, child.wait_with_output()).await;

        let output = match waited {
            Ok(output) => output?,
            Err(_) => {
                let limit_ms = self.config.timeout.as_millis() as u64;
                log::warn!(
                    "execution exceeded {} ms, interpreter process killed",
                    limit_ms
                );
                return Ok(ExecutionResult::failure(
                    ExecutorError::TimeoutExceeded(limit_ms).to_string(),
                    elapsed_ms(started),
                ));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // A trapped exception exits zero but leaves a diagnostic on stderr;
        // both paths count as a runtime failure.
        let success = output.status.success() && stderr.trim().is_empty();
        Ok(ExecutionResult {
            success,
            output: stdout,
            error: if stderr.trim().is_empty() {
                None
            } else {
                Some(stderr)
            },
            execution_time_ms: elapsed_ms(started),
            memory_usage: None,
        })
    }
}

fn elapsed_ms(started: &Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
