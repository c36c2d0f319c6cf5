//! Production tmux query adapter built on `tokio::process`.

use async_trait::async_trait;

use super::process::{ensure_success, parse_lines, run_tmux};
use super::TmuxClient;
use crate::error::TmuxError;

/// Queries and key injection against a real tmux server.
#[derive(Clone, Debug, Default)]
pub struct SystemTmux {
    /// Optional `tmux -L` socket name for non-default servers.
    socket: Option<String>,
}

impl SystemTmux {
    pub fn new(socket: Option<String>) -> Self {
        Self { socket }
    }

    fn socket(&self) -> Option<&str> {
        self.socket.as_deref()
    }
}

/// Split a `"<index> <name>"` window display line into index and name.
///
/// The name may itself contain spaces; only the first token is the index.
/// A line with no name part yields an empty name.
pub fn split_window_line(line: &str) -> (String, String) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((index, name)) => (index.to_string(), name.trim().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

#[async_trait]
impl TmuxClient for SystemTmux {
    async fn list_sessions(&self) -> Vec<String> {
        let result = run_tmux(
            self.socket(),
            &["list-sessions", "-F", "#{session_name}"],
        )
        .await
        .and_then(ensure_success);
        match result {
            Ok(output) => parse_lines(&output.stdout),
            Err(e) => {
                // "No server running" is the common case here; surface it to
                // the caller as "no sessions" rather than a failure.
                tracing::debug!(error = %e, "list-sessions failed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError> {
        let output = run_tmux(
            self.socket(),
            &[
                "list-windows",
                "-t",
                session,
                "-F",
                "#{window_index} #{window_name}",
            ],
        )
        .await
        .and_then(ensure_success)?;
        Ok(parse_lines(&output.stdout))
    }

    async fn list_panes(&self, session: &str, window: &str) -> Result<Vec<String>, TmuxError> {
        let target = format!("{session}:{window}");
        let output = run_tmux(
            self.socket(),
            &["list-panes", "-t", target.as_str(), "-F", "#{pane_index}"],
        )
        .await
        .and_then(ensure_success)?;
        Ok(parse_lines(&output.stdout))
    }

    async fn has_session(&self, session: &str) -> bool {
        match run_tmux(self.socket(), &["has-session", "-t", session]).await {
            Ok(output) => output.success(),
            Err(_) => false,
        }
    }

    async fn has_window(&self, session: &str, window_name: &str) -> bool {
        match self.list_windows(session).await {
            Ok(windows) => windows
                .iter()
                .any(|line| split_window_line(line).1 == window_name),
            Err(_) => false,
        }
    }

    async fn has_pane_kept(&self, session: &str, window: &str, expected: usize) -> bool {
        match self.list_panes(session, window).await {
            Ok(panes) => panes.len() == expected,
            Err(_) => false,
        }
    }

    async fn send_keys(
        &self,
        session: Option<&str>,
        window: &str,
        pane: Option<&str>,
        command: &str,
    ) -> Result<(), TmuxError> {
        let target = super::dispatch::target_descriptor(session, window, pane);
        tracing::debug!(%target, %command, "tmux send-keys");
        run_tmux(
            self.socket(),
            &["send-keys", "-t", target.as_str(), command, "C-m"],
        )
        .await
        .and_then(ensure_success)?;
        Ok(())
    }
}
