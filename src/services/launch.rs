use camino::Utf8PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

use crate::models::{ExecutionMode, ResolvedLaunchPlan};

/// Errors that can occur while starting or running the runtime
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error(
        "Execution failed: {reason}\nJava home: {}\nJava command: {runtime_executable}\nJava arguments: {arguments:?}",
        display_home(.runtime_home)
    )]
    Failed {
        reason: String,
        runtime_home: Option<Utf8PathBuf>,
        runtime_executable: Utf8PathBuf,
        arguments: Vec<String>,
    },
}

impl ExecutionError {
    fn failed(plan: &ResolvedLaunchPlan, reason: impl ToString) -> Self {
        Self::Failed {
            reason: reason.to_string(),
            runtime_home: plan.runtime_home.clone(),
            runtime_executable: plan.runtime_executable.clone(),
            arguments: plan.arguments.clone(),
        }
    }
}

/// Starts the runtime described by a [`ResolvedLaunchPlan`].
///
/// - **Foreground**: waits for the child; a non-zero exit is a failure. With
///   `capture_output` the child's stdout/stderr are buffered and logged when
///   it fails, otherwise they are discarded.
/// - **Background**: only the spawn is checked; the child is never awaited
///   and its output is discarded.
///
/// There are no retries.
#[derive(Debug, Default)]
pub struct LaunchExecutor;

impl LaunchExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Command for `plan`: executable, arguments, working directory and the
    /// inherited environment plus the plan's overrides.
    ///
    /// All standard streams go to the null device unless output is captured.
    pub fn build_command(&self, plan: &ResolvedLaunchPlan) -> Command {
        let mut command = Command::new(&plan.runtime_executable);
        command
            .args(&plan.arguments)
            .current_dir(&plan.working_directory)
            .envs(&plan.environment)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    pub async fn execute(&self, plan: &ResolvedLaunchPlan) -> Result<(), ExecutionError> {
        let mut command = self.build_command(plan);

        match plan.mode {
            ExecutionMode::Foreground {
                capture_output: true,
            } => {
                command.stdout(Stdio::piped()).stderr(Stdio::piped());

                let child = command
                    .spawn()
                    .map_err(|e| ExecutionError::failed(plan, e))?;
                let output = child
                    .wait_with_output()
                    .await
                    .map_err(|e| ExecutionError::failed(plan, e))?;

                if !output.status.success() {
                    log_captured("STDOUT", &output.stdout);
                    log_captured("STDERR", &output.stderr);
                    return Err(ExecutionError::failed(plan, output.status.to_string()));
                }

                tracing::info!("Java process completed with {}", output.status);
            }
            ExecutionMode::Foreground {
                capture_output: false,
            } => {
                let status = command
                    .status()
                    .await
                    .map_err(|e| ExecutionError::failed(plan, e))?;

                if !status.success() {
                    return Err(ExecutionError::failed(plan, status.to_string()));
                }

                tracing::info!("Java process completed with {}", status);
            }
            ExecutionMode::Background => {
                let child = command
                    .spawn()
                    .map_err(|e| ExecutionError::failed(plan, e))?;
                tracing::info!("Java process started in background (pid {:?})", child.id());
            }
        }

        Ok(())
    }
}

fn display_home(home: &Option<Utf8PathBuf>) -> &str {
    home.as_ref().map(|h| h.as_str()).unwrap_or_default()
}

fn log_captured(stream: &str, bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if !text.is_empty() {
        tracing::info!("{}:\n{}\n", stream, text);
    }
}
