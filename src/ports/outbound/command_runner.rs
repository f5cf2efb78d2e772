use crate::shared::Result;
use std::path::Path;

/// Captured result of an external tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// CommandRunner port for invoking ecosystem tooling
///
/// This port abstracts process execution (e.g., `go list`, `go mod graph`)
/// so collectors can be exercised without the toolchain installed.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` inside `working_dir`
    ///
    /// # Returns
    /// The captured output. A non-zero exit status is reported through
    /// `CommandOutput::success`, not as an error.
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned at all
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput>;
}
