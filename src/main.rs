//! CLI entry point for tmuxy.

mod cli;

use clap::Parser;
use tmuxy::app::App;
use tmuxy::config::load_config;
use tmuxy::tmux::SystemTmux;
use tmuxy::ui::TerminalUi;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // Diagnostics go to stderr and stay out of the prompt flow unless
    // RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(socket) = &args.socket {
        config.tmux.socket = Some(socket.clone());
    }
    if args.no_color {
        config.display.color = false;
    }

    let tmux = SystemTmux::new(config.tmux.socket.clone());
    let ui = TerminalUi::new(config.display.color);
    let mut app = App::new(&tmux, &ui);

    match args.text {
        Some(text) => app.run_fresh(Some(text)).await,
        None => app.repl().await,
    }
}
