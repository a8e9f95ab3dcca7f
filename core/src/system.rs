use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use linkprobe_common::error::ProbeError;
use linkprobe_common::system::{self, CommandRunner};

/// Spawns real processes and waits for them. No shell, no timeout.
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProbeError> {
        let command: String = system::command_line(program, args);
        debug!("Running `{command}`");

        let output: Output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProbeError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                command,
                status: output.status.to_string(),
            });
        }

        let stdout: String = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!("`{command}` printed {} lines", stdout.lines().count());
        Ok(stdout)
    }
}
