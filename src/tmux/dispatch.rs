//! Batch dispatch of command lines into a tmux pane.

use super::format::format_command;
use super::TmuxClient;
use crate::error::TmuxError;
use crate::target::Target;

/// Result of dispatching one formatted command line.
///
/// Each line's send is an independent operation; a failed line is reported
/// but never blocks the lines after it.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// The formatted command that was sent (or attempted).
    pub command: String,
    pub result: Result<(), TmuxError>,
}

/// Build a tmux `-t` target descriptor from its optional parts.
///
/// `window` alone when the pane is absent, else `window.pane`; prefixed with
/// `session:` when a session is given.
pub fn target_descriptor(session: Option<&str>, window: &str, pane: Option<&str>) -> String {
    let mut target = match pane {
        Some(pane) => format!("{window}.{pane}"),
        None => window.to_string(),
    };
    if let Some(session) = session {
        target = format!("{session}:{target}");
    }
    target
}

/// Dispatch a batch of raw command lines to a resolved target, in order.
///
/// Every line is formatted first; lines that format to the empty string are
/// skipped without an injection call. Dispatch waits only for the local
/// injection to return, never for the remote shell to finish a line.
pub async fn execute_command_list(
    client: &dyn TmuxClient,
    target: &Target,
    commands: &[String],
) -> Vec<DispatchOutcome> {
    let mut outcomes = Vec::new();
    for raw in commands {
        let command = format_command(raw);
        if command.is_empty() {
            continue;
        }
        let result = client
            .send_keys(
                Some(&target.session),
                &target.window,
                Some(&target.pane),
                &command,
            )
            .await;
        if let Err(e) = &result {
            tracing::debug!(%command, error = %e, "dispatch failed");
        }
        outcomes.push(DispatchOutcome { command, result });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn descriptor_with_all_parts() {
        assert_eq!(
            target_descriptor(Some("work"), "1", Some("2")),
            "work:1.2"
        );
    }

    #[test]
    fn descriptor_without_pane_targets_window() {
        assert_eq!(target_descriptor(Some("work"), "1", None), "work:1");
    }

    #[test]
    fn descriptor_without_session_is_relative() {
        assert_eq!(target_descriptor(None, "1", Some("2")), "1.2");
        assert_eq!(target_descriptor(None, "1", None), "1");
    }

    /// Records every send and fails commands on request.
    #[derive(Default)]
    struct RecordingClient {
        sent: Mutex<Vec<(String, String)>>,
        fail_containing: Option<String>,
    }

    #[async_trait]
    impl TmuxClient for RecordingClient {
        async fn list_sessions(&self) -> Vec<String> {
            Vec::new()
        }

        async fn list_windows(&self, _session: &str) -> Result<Vec<String>, TmuxError> {
            Ok(Vec::new())
        }

        async fn list_panes(
            &self,
            _session: &str,
            _window: &str,
        ) -> Result<Vec<String>, TmuxError> {
            Ok(Vec::new())
        }

        async fn has_session(&self, _session: &str) -> bool {
            false
        }

        async fn has_window(&self, _session: &str, _window_name: &str) -> bool {
            false
        }

        async fn has_pane_kept(&self, _session: &str, _window: &str, _expected: usize) -> bool {
            false
        }

        async fn send_keys(
            &self,
            session: Option<&str>,
            window: &str,
            pane: Option<&str>,
            command: &str,
        ) -> Result<(), TmuxError> {
            let target = target_descriptor(session, window, pane);
            self.sent
                .lock()
                .expect("lock")
                .push((target, command.to_string()));
            if let Some(marker) = &self.fail_containing {
                if command.contains(marker.as_str()) {
                    return Err(TmuxError::CommandFailed("injected failure".into()));
                }
            }
            Ok(())
        }
    }

    fn target() -> Target {
        Target {
            session: "work".into(),
            window: "1".into(),
            pane: "1".into(),
        }
    }

    #[tokio::test]
    async fn empty_and_blank_lines_are_skipped() {
        let client = RecordingClient::default();
        let batch = vec!["".to_string(), "echo hi".to_string(), "   ".to_string()];
        let outcomes = execute_command_list(&client, &target(), &batch).await;

        let sent = client.sent.lock().expect("lock");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], ("work:1.1".to_string(), "echo hi".to_string()));
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_ok());
    }

    #[tokio::test]
    async fn lines_dispatch_in_source_order() {
        let client = RecordingClient::default();
        let batch = vec![
            "cd /tmp".to_string(),
            "cargo build".to_string(),
            "cargo test".to_string(),
        ];
        execute_command_list(&client, &target(), &batch).await;

        let sent = client.sent.lock().expect("lock");
        let commands: Vec<&str> = sent.iter().map(|(_, c)| c.as_str()).collect();
        assert_eq!(commands, vec!["cd /tmp", "cargo build", "cargo test"]);
    }

    #[tokio::test]
    async fn failed_line_does_not_abort_the_rest() {
        let client = RecordingClient {
            fail_containing: Some("boom".into()),
            ..Default::default()
        };
        let batch = vec![
            "echo one".to_string(),
            "boom".to_string(),
            "echo three".to_string(),
        ];
        let outcomes = execute_command_list(&client, &target(), &batch).await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
        assert_eq!(client.sent.lock().expect("lock").len(), 3);
    }

    #[tokio::test]
    async fn lines_are_formatted_before_dispatch() {
        let client = RecordingClient::default();
        let batch = vec!["  echo 'hi'; ls  ".to_string()];
        execute_command_list(&client, &target(), &batch).await;

        let sent = client.sent.lock().expect("lock");
        assert_eq!(sent[0].1, "echo \"hi\"\\; ls");
    }
}
