//! CLI argument parsing via clap.

use clap::Parser;

/// Run a shell command in a pane of a running tmux session.
#[derive(Debug, Parser)]
#[command(name = "tmuxy", version)]
pub struct Args {
    /// Command text to dispatch. May contain newlines; each line is sent
    /// separately. If provided, runs in one-shot mode and exits; without
    /// it, tmuxy starts an interactive prompt loop.
    pub text: Option<String>,

    /// Path to config file (default: ./tmuxy.toml or ~/.config/tmuxy/tmuxy.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// tmux socket name (tmux -L) for a non-default server.
    #[arg(short = 'L', long = "socket")]
    pub socket: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn positional_text_enables_one_shot() {
        let args = Args::parse_from(["tmuxy", "cargo test"]);
        assert_eq!(args.text.as_deref(), Some("cargo test"));
    }

    #[test]
    fn no_text_means_interactive() {
        let args = Args::parse_from(["tmuxy"]);
        assert!(args.text.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn socket_flag_parses_short_and_long() {
        let args = Args::parse_from(["tmuxy", "-L", "dev", "ls"]);
        assert_eq!(args.socket.as_deref(), Some("dev"));
        let args = Args::parse_from(["tmuxy", "--socket", "dev"]);
        assert_eq!(args.socket.as_deref(), Some("dev"));
    }

    #[test]
    fn config_and_no_color_flags_parse() {
        let args = Args::parse_from(["tmuxy", "-c", "custom.toml", "--no-color"]);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert!(args.no_color);
    }
}
