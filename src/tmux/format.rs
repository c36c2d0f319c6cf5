//! Command-line normalization for tmux key injection.

/// Normalize one raw command line into a tmux-safe literal.
///
/// Surrounding whitespace is trimmed, both quote kinds are rewritten to a
/// double quote (intentional: the injected string travels as a single
/// `send-keys` argument, so the two kinds need not be distinguished), and
/// tmux's own command separator `;` is escaped so a multi-statement line is
/// not split by the tmux command parser.
///
/// Pure and total: formatting never fails, and the empty string formats to
/// the empty string.
pub fn format_command(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '\'' | '"' => out.push('"'),
            ';' => out.push_str("\\;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(format_command("  ls -l  "), "ls -l");
        assert_eq!(format_command("\techo hi\n"), "echo hi");
    }

    #[test]
    fn empty_input_formats_to_empty() {
        assert_eq!(format_command(""), "");
        assert_eq!(format_command("   "), "");
    }

    #[test]
    fn normalizes_both_quote_kinds_to_double_quote() {
        assert_eq!(format_command("echo 'hi'"), "echo \"hi\"");
        assert_eq!(format_command("echo \"hi\""), "echo \"hi\"");
        assert_eq!(format_command("it's \"fine\""), "it\"s \"fine\"");
    }

    #[test]
    fn escapes_every_semicolon() {
        assert_eq!(format_command("cd /tmp; ls"), "cd /tmp\\; ls");
        assert_eq!(format_command("a;b;c"), "a\\;b\\;c");
    }

    #[test]
    fn idempotent_on_plain_input() {
        let plain = "cargo test --workspace";
        assert_eq!(format_command(&format_command(plain)), format_command(plain));
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn idempotent_without_quotes_or_semicolons(
                s in proptest::string::string_regex("[a-zA-Z0-9 ./_-]{0,64}").expect("regex")
            ) {
                let once = format_command(&s);
                prop_assert_eq!(format_command(&once), once);
            }

            #[test]
            fn output_never_contains_bare_semicolon(
                s in proptest::string::string_regex("[a-z;'\" ]{0,64}").expect("regex")
            ) {
                let out = format_command(&s);
                let mut previous = None;
                for ch in out.chars() {
                    if ch == ';' {
                        prop_assert_eq!(previous, Some('\\'));
                    }
                    previous = Some(ch);
                }
            }
        }
    }
}
