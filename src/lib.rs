//! Tmuxy — dispatch shell commands into a running tmux pane.
//!
//! Tmuxy discovers the sessions, windows, and panes of a running tmux
//! server, lets the user disambiguate among them, remembers the last target
//! used, and sends multi-line command text into the chosen pane as
//! keystrokes. It is aimed at iterate-on-a-command workflows (build, test,
//! run) where the command executes in a long-lived pane while the user keeps
//! working elsewhere.
//!
//! # Quick start
//!
//! ```no_run
//! use tmuxy::target::{resolve_fresh, TargetStore};
//! use tmuxy::tmux::{dispatch::execute_command_list, SystemTmux};
//! use tmuxy::ui::TerminalUi;
//!
//! # async fn example() {
//! let tmux = SystemTmux::new(None);
//! let ui = TerminalUi::new(true);
//! let mut store = TargetStore::default();
//! if let Ok(target) = resolve_fresh(&tmux, &ui, &mut store).await {
//!     execute_command_list(&tmux, &target, &["cargo test".to_string()]).await;
//! }
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod target;
#[cfg(test)]
pub mod testsupport;
pub mod tmux;
pub mod ui;
