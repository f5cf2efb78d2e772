use crate::ports::outbound::{CommandOutput, CommandRunner};
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// SystemCommandRunner adapter spawning real processes
///
/// Output is captured in full; stdin is closed so tools never wait for input.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DeplisterError::ScanFailed {
                command: format!("{} {}", program, args.join(" ")),
                details: format!("failed to start process: {}", e),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
