//! Flag parsing for individual commands.
//!
//! The dispatcher treats option parsing as a collaborator with a narrow
//! contract: given the flags a command declares (the standard `-h`/`--help`
//! is always among them) and the tokens left after the command name, return
//! which flags were seen plus the leftover positionals, or a [`UsageError`]
//! whose message is rendered verbatim into the usage banner.
//!
//! Scanning is conventional: flags and positionals may be interspersed, `--`
//! ends flag recognition, a lone `-` is positional, and short flags cluster
//! (`-ab` means `-a -b`). Only boolean flags exist here; commands have no
//! channel to receive option values, so none are declared.

use std::collections::BTreeSet;

use thiserror::Error;

/// A rejected token stream, carrying the human-readable complaint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// One declared boolean flag.
#[derive(Debug, Clone)]
pub struct Flag {
    short: Option<char>,
    long: String,
    help: String,
}

impl Flag {
    /// The flag column as shown on a usage page, e.g. `-h, --help`.
    pub fn label(&self) -> String {
        match self.short {
            Some(short) => format!("-{}, --{}", short, self.long),
            None => format!("--{}", self.long),
        }
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn help(&self) -> &str {
        &self.help
    }
}

/// The set of flags one command accepts.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    flags: Vec<Flag>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set every command starts from: just the standard help flag.
    pub fn with_help() -> Self {
        let mut set = Self::new();
        set.add(Some('h'), "help", "show this help message and exit");
        set
    }

    /// Declare a flag. `long` is the canonical name [`Matches::has`] answers for.
    pub fn add(&mut self, short: Option<char>, long: &str, help: &str) {
        self.flags.push(Flag {
            short,
            long: long.to_string(),
            help: help.to_string(),
        });
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    fn by_long(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.long == name)
    }

    fn by_short(&self, short: char) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.short == Some(short))
    }

    /// Scan `tokens` into seen flags and leftover positionals.
    pub fn parse(&self, tokens: &[String]) -> Result<Matches, UsageError> {
        let mut matches = Matches::default();
        let mut flags_done = false;

        for token in tokens {
            if flags_done {
                matches.args.push(token.clone());
                continue;
            }
            if token == "--" {
                flags_done = true;
                continue;
            }
            if let Some(rest) = token.strip_prefix("--") {
                let (name, value) = match rest.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (rest, None),
                };
                let Some(flag) = self.by_long(name) else {
                    return Err(UsageError(format!("no such option: --{name}")));
                };
                if value.is_some() {
                    return Err(UsageError(format!(
                        "option --{name} does not take a value"
                    )));
                }
                matches.seen.insert(flag.long.clone());
            } else if token.len() > 1 && token.starts_with('-') {
                for short in token[1..].chars() {
                    let Some(flag) = self.by_short(short) else {
                        return Err(UsageError(format!("no such option: -{short}")));
                    };
                    matches.seen.insert(flag.long.clone());
                }
            } else {
                matches.args.push(token.clone());
            }
        }

        Ok(matches)
    }
}

/// What a scan produced: flags seen (by long name) and leftover positionals.
#[derive(Debug, Clone, Default)]
pub struct Matches {
    seen: BTreeSet<String>,
    /// Positional tokens, in order.
    pub args: Vec<String>,
}

impl Matches {
    /// Was the flag with this long name present?
    pub fn has(&self, long: &str) -> bool {
        self.seen.contains(long)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_empty_input_parses_to_nothing() {
        let matches = OptionSet::with_help().parse(&[]).unwrap();
        assert!(!matches.has("help"));
        assert!(matches.args.is_empty());
    }

    #[test]
    fn test_help_recognized_short_and_long() {
        let set = OptionSet::with_help();
        assert!(set.parse(&tokens(&["-h"])).unwrap().has("help"));
        assert!(set.parse(&tokens(&["--help"])).unwrap().has("help"));
    }

    #[test]
    fn test_flags_and_positionals_intersperse() {
        let matches = OptionSet::with_help()
            .parse(&tokens(&["foo", "--help", "bar"]))
            .unwrap();
        assert!(matches.has("help"));
        assert_eq!(matches.args, vec!["foo", "bar"]);
    }

    #[test]
    fn test_unknown_long_flag_is_a_usage_error() {
        let err = OptionSet::with_help()
            .parse(&tokens(&["--version"]))
            .unwrap_err();
        assert_eq!(err.0, "no such option: --version");
    }

    #[test]
    fn test_unknown_long_flag_with_value_reports_the_name_only() {
        let err = OptionSet::with_help()
            .parse(&tokens(&["--bogus=3"]))
            .unwrap_err();
        assert_eq!(err.0, "no such option: --bogus");
    }

    #[test]
    fn test_boolean_flag_rejects_a_value() {
        let err = OptionSet::with_help()
            .parse(&tokens(&["--help=now"]))
            .unwrap_err();
        assert_eq!(err.0, "option --help does not take a value");
    }

    #[test]
    fn test_short_flags_cluster() {
        let mut set = OptionSet::new();
        set.add(Some('a'), "all", "");
        set.add(Some('b'), "brief", "");
        let matches = set.parse(&tokens(&["-ab"])).unwrap();
        assert!(matches.has("all"));
        assert!(matches.has("brief"));

        let err = set.parse(&tokens(&["-ax"])).unwrap_err();
        assert_eq!(err.0, "no such option: -x");
    }

    #[test]
    fn test_double_dash_ends_flag_recognition() {
        let matches = OptionSet::with_help()
            .parse(&tokens(&["foo", "--", "-h", "--help"]))
            .unwrap();
        assert!(!matches.has("help"));
        assert_eq!(matches.args, vec!["foo", "-h", "--help"]);
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let matches = OptionSet::with_help().parse(&tokens(&["-"])).unwrap();
        assert_eq!(matches.args, vec!["-"]);
    }

    #[test]
    fn test_labels_cover_both_shapes() {
        let mut set = OptionSet::new();
        set.add(Some('h'), "help", "show this help message and exit");
        set.add(None, "verbose", "narrate the scan");
        assert_eq!(set.flags()[0].label(), "-h, --help");
        assert_eq!(set.flags()[1].label(), "--verbose");
    }
}
