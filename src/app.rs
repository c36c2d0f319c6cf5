//! Invocation boundary: one-shot runs and the interactive prompt loop.
//!
//! Every failure below this layer is converted to a user-facing
//! notification here; nothing propagates out as an unhandled fault. A
//! cancelled prompt aborts the invocation without any message.

use std::io::{self, BufRead, Write};

use crate::error::RunError;
use crate::target::{resolve_fresh, resolve_saved, Target, TargetStore};
use crate::tmux::dispatch::execute_command_list;
use crate::tmux::TmuxClient;
use crate::ui::Ui;

const COMMAND_PROMPT: &str = "Command to run (e.g. ls -l):";

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Blank line; ignored.
    Empty,
    /// `:q` / `:quit` — leave the loop.
    Quit,
    /// `:target` — show the remembered target.
    ShowTarget,
    /// Plain text — dispatch via a fresh target pick.
    Fresh(String),
    /// `! text` — dispatch via the remembered target. The text may be
    /// empty (`!` alone), in which case the user is prompted for it.
    Saved(String),
}

/// Classify one line of interactive input.
pub fn classify_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    match trimmed {
        "" => ReplInput::Empty,
        ":q" | ":quit" => ReplInput::Quit,
        ":target" => ReplInput::ShowTarget,
        _ => {
            if let Some(rest) = trimmed.strip_prefix('!') {
                ReplInput::Saved(rest.trim().to_string())
            } else {
                ReplInput::Fresh(trimmed.to_string())
            }
        }
    }
}

/// Application state for one tmuxy process: the tmux client, the
/// interaction layer, and the process-lifetime target memory.
pub struct App<'a> {
    client: &'a dyn TmuxClient,
    ui: &'a dyn Ui,
    store: TargetStore,
}

impl<'a> App<'a> {
    pub fn new(client: &'a dyn TmuxClient, ui: &'a dyn Ui) -> Self {
        Self {
            client,
            ui,
            store: TargetStore::default(),
        }
    }

    /// Dispatch `text` (prompting for it when absent) via a fresh target
    /// pick. The command text is collected before any tmux query so a
    /// cancelled text prompt costs nothing.
    pub async fn run_fresh(&mut self, text: Option<String>) {
        let Some(batch) = self.command_batch(text) else {
            return;
        };
        match resolve_fresh(self.client, self.ui, &mut self.store).await {
            Ok(target) => self.dispatch(&target, &batch).await,
            Err(e) => self.report(e),
        }
    }

    /// Dispatch `text` via the remembered target, if it validates.
    pub async fn run_saved(&mut self, text: Option<String>) {
        let Some(batch) = self.command_batch(text) else {
            return;
        };
        match resolve_saved(self.client, &self.store).await {
            Ok(target) => self.dispatch(&target, &batch).await,
            Err(e) => self.report(e),
        }
    }

    /// Interactive prompt loop. Plain text is a fresh invocation; `!`
    /// routes through the saved target; `:target` and `:quit` are local.
    pub async fn repl(&mut self) {
        self.ui
            .notify_info("Type a command to pick a pane and run it; `!cmd` reuses the last pane; `:q` quits.");
        loop {
            let mut line = String::new();
            {
                let mut stderr = io::stderr();
                let _ = write!(stderr, "tmuxy> ");
                let _ = stderr.flush();
            }
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            match classify_input(&line) {
                ReplInput::Empty => continue,
                ReplInput::Quit => break,
                ReplInput::ShowTarget => self.show_target(),
                ReplInput::Fresh(text) => self.run_fresh(Some(text)).await,
                ReplInput::Saved(text) => {
                    let text = if text.is_empty() { None } else { Some(text) };
                    self.run_saved(text).await;
                }
            }
        }
    }

    /// Turn the given (or prompted-for) text into an ordered command batch.
    /// Returns `None` when the user dismissed the text prompt.
    fn command_batch(&self, text: Option<String>) -> Option<Vec<String>> {
        let text = match text.filter(|t| !t.trim().is_empty()) {
            Some(text) => text,
            None => self.ui.prompt_free_text(COMMAND_PROMPT)?,
        };
        Some(text.split('\n').map(str::to_string).collect())
    }

    async fn dispatch(&self, target: &Target, batch: &[String]) {
        let outcomes = execute_command_list(self.client, target, batch).await;
        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                self.ui
                    .notify_error(&format!("failed to send `{}`: {e}", outcome.command));
            }
        }
    }

    fn show_target(&self) {
        match self.store.last() {
            Some(saved) => self.ui.notify_info(&format!(
                "saved target: {}:{}.{} (window `{}`, {} pane{})",
                saved.target.session,
                saved.target.window,
                saved.target.pane,
                saved.window_name,
                saved.pane_count,
                if saved.pane_count == 1 { "" } else { "s" },
            )),
            None => self.ui.notify_info("no saved target yet"),
        }
    }

    fn report(&self, err: RunError) {
        match err {
            RunError::Cancelled => {}
            other => self.ui.notify_error(&other.to_string()),
        }
    }
}
