//! Process helpers shared by the tmux query and dispatch paths.

use std::process::Stdio;
use tokio::process::Command;

use crate::error::TmuxError;

/// Captured output of one tmux invocation.
#[derive(Debug)]
pub(super) struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// True when the invocation exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn `tmux` with the given arguments and wait for it to exit.
///
/// An optional socket name maps to `tmux -L <socket>` so tmuxy can address a
/// non-default server.
pub(super) async fn run_tmux(
    socket: Option<&str>,
    args: &[&str],
) -> Result<ExecOutput, TmuxError> {
    let mut cmd = Command::new("tmux");
    // A dropped future must not leave a tmux child lingering.
    cmd.kill_on_drop(true);
    if let Some(socket) = socket {
        cmd.args(["-L", socket]);
    }
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

    tracing::debug!(?args, "running tmux");

    let child = cmd.spawn().map_err(|e| TmuxError::Spawn(e.to_string()))?;
    let output = child
        .wait_with_output()
        .await
        .map_err(|e| TmuxError::Spawn(e.to_string()))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert a nonzero tmux exit into a `CommandFailed` error.
pub(super) fn ensure_success(output: ExecOutput) -> Result<ExecOutput, TmuxError> {
    if output.success() {
        return Ok(output);
    }

    let mut details = output.stderr.trim().to_string();
    if details.is_empty() {
        details = output.stdout.trim().to_string();
    }
    if details.is_empty() {
        details = format!("exited with {}", output.exit_code);
    }
    Err(TmuxError::CommandFailed(details))
}

/// Split line-oriented tmux stdout into trimmed, non-empty lines.
pub(super) fn parse_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
