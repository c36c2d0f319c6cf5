//! Tmux query adapter, command formatter, and key-injection transport.
//!
//! Everything that talks to the tmux binary lives here. The `TmuxClient`
//! trait is the seam between resolution/dispatch logic and the real server;
//! `SystemTmux` is the production implementation built on `tokio::process`.

pub mod dispatch;
pub mod format;
mod process;
pub mod query;

pub use query::SystemTmux;

use async_trait::async_trait;

use crate::error::TmuxError;

/// Read-only discovery plus targeted key injection against a tmux server.
///
/// All list/has operations are idempotent queries. `send_keys` is
/// fire-and-forget with respect to remote execution: a successful return
/// means the keystrokes were delivered, not that the command finished.
#[async_trait]
pub trait TmuxClient: Send + Sync {
    /// List session names, one per session on the server.
    ///
    /// Fails softly: any tmux error (including "no server running") yields
    /// an empty list so callers can surface a "no sessions" message instead
    /// of an adapter failure.
    async fn list_sessions(&self) -> Vec<String>;

    /// List windows of a session as `"<index> <name>"` display lines, in
    /// tmux window-index order. The order is load-bearing: the leading token
    /// of a picked line recovers that window's index.
    async fn list_windows(&self, session: &str) -> Result<Vec<String>, TmuxError>;

    /// List pane indices of a window, in pane-index order.
    async fn list_panes(&self, session: &str, window: &str) -> Result<Vec<String>, TmuxError>;

    /// True iff the session exists. Any error (including "no server") is
    /// `false`.
    async fn has_session(&self, session: &str) -> bool;

    /// True iff `window_name` appears in the session's current window list.
    /// Any error (session gone, server gone) is `false`.
    async fn has_window(&self, session: &str, window_name: &str) -> bool;

    /// True iff the window's current pane count equals `expected` exactly.
    ///
    /// Strict equality, not containment: pane indices are not stable
    /// identities across layout changes, so added or removed panes
    /// invalidate a remembered index even when that pane itself survived.
    async fn has_pane_kept(&self, session: &str, window: &str, expected: usize) -> bool;

    /// Send one command string plus Enter to a target pane as keystrokes.
    async fn send_keys(
        &self,
        session: Option<&str>,
        window: &str,
        pane: Option<&str>,
        command: &str,
    ) -> Result<(), TmuxError>;
}
