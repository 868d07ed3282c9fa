//! Executor configuration with deployment-tunable defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Default wall-clock limit for a single execution.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Tunables for the execution engine.
///
/// The defaults match the production deployment: a 10 second wall-clock
/// limit, scripts under the system temp directory, and interpreters resolved
/// from `PATH`. Builder-style `with_*` methods cover the overrides a
/// deployment actually needs (shorter limits in grading queues, pinned
/// interpreter paths on hardened hosts).
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Hard wall-clock limit per execution.
    pub timeout: Duration,
    /// Root for per-request temp directories; `None` means the system default.
    pub temp_root: Option<PathBuf>,
    /// Override for the JavaScript interpreter; `None` resolves the profile
    /// default from `PATH`.
    pub node_binary: Option<String>,
    /// Override for the Python interpreter; `None` resolves the profile
    /// default from `PATH`.
    pub python_binary: Option<String>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            temp_root: None,
            node_binary: None,
            python_binary: None,
        }
    }
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    pub fn with_temp_root(mut self, temp_root: PathBuf) -> Self {
        self.temp_root = Some(temp_root);
        self
    }

    pub fn with_node_binary(mut self, binary: impl Into<String>) -> Self {
        self.node_binary = Some(binary.into());
        self
    }

    pub fn with_python_binary(mut self, binary: impl Into<String>) -> Self {
        self.python_binary = Some(binary.into());
        self
    }
}
