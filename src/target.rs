//! Target resolution and last-used-target memory.
//!
//! Two resolution paths produce a concrete (session, window, pane) triple:
//! a fresh pick driven by user disambiguation, and reuse of the remembered
//! triple after validating it still addresses what it addressed before.

use crate::error::{RunError, StaleReason, TmuxError};
use crate::tmux::query::split_window_line;
use crate::tmux::TmuxClient;
use crate::ui::Ui;

/// A concrete dispatch destination. Plain value type; the session name is
/// unique per server, the window index unique per session, the pane index
/// unique per window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub session: String,
    pub window: String,
    pub pane: String,
}

/// The last successfully resolved target plus the context needed to decide
/// later whether it can be trusted again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedTarget {
    pub target: Target,
    /// Window name at save time; windows are revalidated by name because
    /// indices shift when windows are reordered.
    pub window_name: String,
    /// Pane count observed in the window at save time. Any later drift
    /// invalidates the remembered pane index.
    pub pane_count: usize,
}

/// Process-lifetime memory of the last successful resolution.
///
/// An absent record models "nothing has run yet"; its fields simply do not
/// exist to be misused. The record is replaced wholesale on every successful
/// fresh resolution — only `resolve_fresh` writes here, the saved path is
/// read-only.
#[derive(Debug, Default)]
pub struct TargetStore {
    last: Option<SavedTarget>,
}

impl TargetStore {
    /// The remembered target, if any fresh resolution has succeeded.
    pub fn last(&self) -> Option<&SavedTarget> {
        self.last.as_ref()
    }

    pub fn has_run(&self) -> bool {
        self.last.is_some()
    }

    fn record(&mut self, saved: SavedTarget) {
        self.last = Some(saved);
    }
}

/// Resolve a target by querying tmux and asking the user to disambiguate.
///
/// Selection policy per step:
/// - session: always prompted; cancel aborts the invocation silently.
/// - window: auto-selected when the session has exactly one; otherwise the
///   user picks a `"<index> <name>"` display line and the leading token
///   recovers the index. Cancel aborts silently.
/// - pane: auto-selected when the window has exactly one; otherwise the
///   user picks an index, and cancel falls back to pane `"1"` rather than
///   aborting. The asymmetry with the window step is long-observed behavior
///   and is kept as-is.
///
/// On success the store's record is replaced with the new target.
pub async fn resolve_fresh(
    client: &dyn TmuxClient,
    ui: &dyn Ui,
    store: &mut TargetStore,
) -> Result<Target, RunError> {
    let sessions = client.list_sessions().await;
    if sessions.is_empty() {
        return Err(RunError::NoSessions);
    }
    let Some(session) = ui.prompt_choice(&sessions, "Select a session") else {
        return Err(RunError::Cancelled);
    };

    let windows = client.list_windows(&session).await?;
    let window_line = match windows.len() {
        0 => {
            return Err(RunError::Tmux(TmuxError::CommandFailed(format!(
                "no windows reported for session `{session}`"
            ))))
        }
        1 => windows[0].clone(),
        _ => match ui.prompt_choice(&windows, "Select a window") {
            Some(line) => line,
            None => return Err(RunError::Cancelled),
        },
    };
    let (window, window_name) = split_window_line(&window_line);

    let panes = client.list_panes(&session, &window).await?;
    let pane = if panes.len() <= 1 {
        panes.first().cloned().unwrap_or_else(|| "1".to_string())
    } else {
        ui.prompt_choice(&panes, "Select a pane")
            .unwrap_or_else(|| "1".to_string())
    };
    let pane_count = panes.len();

    let target = Target {
        session,
        window,
        pane,
    };
    store.record(SavedTarget {
        target: target.clone(),
        window_name,
        pane_count,
    });
    tracing::debug!(?target, pane_count, "recorded fresh target");
    Ok(target)
}

/// Reuse the remembered target after revalidating it.
///
/// Validation short-circuits in order — session exists, window name still
/// present, pane count unchanged — and each failure carries its own
/// message. A stale target is rejected outright; it never falls back to a
/// fresh pick, and the record is left in place for inspection.
pub async fn resolve_saved(
    client: &dyn TmuxClient,
    store: &TargetStore,
) -> Result<Target, RunError> {
    let Some(saved) = store.last() else {
        return Err(RunError::NoSavedTarget);
    };

    let target = &saved.target;
    if !client.has_session(&target.session).await {
        return Err(RunError::Stale(StaleReason::SessionClosed(
            target.session.clone(),
        )));
    }
    if !client.has_window(&target.session, &saved.window_name).await {
        return Err(RunError::Stale(StaleReason::WindowClosed {
            session: target.session.clone(),
            window_name: saved.window_name.clone(),
        }));
    }
    if !client
        .has_pane_kept(&target.session, &target.window, saved.pane_count)
        .await
    {
        return Err(RunError::Stale(StaleReason::PaneLayoutChanged {
            window: target.window.clone(),
            expected: saved.pane_count,
        }));
    }

    Ok(target.clone())
}
