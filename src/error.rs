//! Unified error types for target resolution and dispatch.

use std::fmt;

// ---------------------------------------------------------------------------
// TmuxError
// ---------------------------------------------------------------------------

/// Errors from invoking the `tmux` binary.
#[derive(Debug)]
pub enum TmuxError {
    /// The tmux binary could not be launched at all.
    Spawn(String),
    /// tmux ran but exited nonzero; carries the trimmed stderr.
    CommandFailed(String),
}

impl fmt::Display for TmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "failed to run tmux: {msg}"),
            Self::CommandFailed(msg) => write!(f, "tmux command failed: {msg}"),
        }
    }
}

impl std::error::Error for TmuxError {}

// ---------------------------------------------------------------------------
// StaleReason
// ---------------------------------------------------------------------------

/// Why a remembered target was rejected during saved-path validation.
///
/// The three variants mirror the three validation checks, which run in this
/// order and short-circuit on the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// The saved session no longer exists (or the server is gone).
    SessionClosed(String),
    /// The saved window name is missing from the session's window list.
    WindowClosed { session: String, window_name: String },
    /// The pane count in the saved window changed since the target was
    /// recorded. Pane indices are not stable across layout changes, so any
    /// drift in either direction invalidates the remembered pane.
    PaneLayoutChanged {
        window: String,
        expected: usize,
    },
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionClosed(session) => {
                write!(f, "saved session `{session}` no longer exists")
            }
            Self::WindowClosed {
                session,
                window_name,
            } => write!(
                f,
                "saved window `{window_name}` no longer exists in session `{session}`"
            ),
            Self::PaneLayoutChanged { window, expected } => write!(
                f,
                "pane count in window `{window}` changed (expected {expected}); pick the target again"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// RunError — per-invocation
// ---------------------------------------------------------------------------

/// Failure modes for one resolve-and-dispatch invocation.
///
/// Everything here is caught at the application boundary and converted to a
/// user-facing notification; `Cancelled` is the one silent case.
#[derive(Debug)]
pub enum RunError {
    /// tmux reported no sessions (or no server is running).
    NoSessions,
    /// The user dismissed a disambiguation prompt.
    Cancelled,
    /// The saved path was invoked before any fresh resolution succeeded.
    NoSavedTarget,
    /// A saved-path validation check failed.
    Stale(StaleReason),
    /// The query adapter failed while listing windows or panes.
    Tmux(TmuxError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSessions => write!(f, "no tmux sessions found (is a tmux server running?)"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::NoSavedTarget => {
                write!(f, "no saved target yet; run a fresh target pick first")
            }
            Self::Stale(reason) => write!(f, "{reason}"),
            Self::Tmux(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<TmuxError> for RunError {
    fn from(e: TmuxError) -> Self {
        Self::Tmux(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
