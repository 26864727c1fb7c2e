//! Command descriptors: the immutable registration record for one subcommand.
//!
//! A [`Command`] is built once, handed to [`App::register`](crate::App::register),
//! and never mutated afterwards. It is the single source of truth for everything
//! the dispatcher and the help renderer need to know about a subcommand: its
//! names, its doc text split into short/long help, the shape of its handler and
//! the flags its option parser accepts.

use std::io;

use crate::options::OptionSet;

/// Fallback shown in listings and usage pages when a command carries no doc text.
pub const NO_DESCRIPTION: &str = "No description.";

// ============================================================================
// Handler shapes
// ============================================================================

/// How positional data is handed to a handler when its command runs.
///
/// The tag is fixed at construction time by which [`Command`] constructor was
/// used; dispatch never inspects the callable itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArgMode {
    /// Handler takes nothing.
    None,
    /// Handler takes the positional tokens left over after option parsing.
    Args,
    /// Handler takes the leftover positionals plus the entire original
    /// argument vector, command token included.
    ArgsAndRaw,
}

/// The callable behind a command, in one of the three supported shapes.
///
/// Handlers return `io::Result<()>`; an error is passed through the dispatcher
/// unchanged, so whatever a handler raises is what the caller of
/// [`App::run`](crate::App::run) sees.
pub enum Handler {
    NoArgs(Box<dyn Fn() -> io::Result<()>>),
    Args(Box<dyn Fn(&[String]) -> io::Result<()>>),
    ArgsAndRaw(Box<dyn Fn(&[String], &[String]) -> io::Result<()>>),
}

impl Handler {
    /// The injection mode implied by this handler's shape.
    pub fn mode(&self) -> ArgMode {
        match self {
            Handler::NoArgs(_) => ArgMode::None,
            Handler::Args(_) => ArgMode::Args,
            Handler::ArgsAndRaw(_) => ArgMode::ArgsAndRaw,
        }
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// One registered subcommand: names, help text, declared flags, handler.
pub struct Command {
    name: String,
    aliases: Vec<String>,
    short_help: String,
    long_help: String,
    options: OptionSet,
    handler: Handler,
}

impl Command {
    fn from_handler(name: impl Into<String>, handler: Handler) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            short_help: NO_DESCRIPTION.to_string(),
            long_help: String::new(),
            options: OptionSet::with_help(),
            handler,
        }
    }

    /// A command whose handler takes no arguments.
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn() -> io::Result<()> + 'static,
    {
        Self::from_handler(name, Handler::NoArgs(Box::new(run)))
    }

    /// A command whose handler receives the leftover positional tokens.
    pub fn with_args<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&[String]) -> io::Result<()> + 'static,
    {
        Self::from_handler(name, Handler::Args(Box::new(run)))
    }

    /// A command whose handler receives the leftover positionals plus the
    /// untouched argument vector (command token included).
    pub fn with_raw_args<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&[String], &[String]) -> io::Result<()> + 'static,
    {
        Self::from_handler(name, Handler::ArgsAndRaw(Box::new(run)))
    }

    /// Add one alias. Repeatable; aliases render in the order they were added.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Attach doc text. The first non-empty line becomes the short help, the
    /// rest (trimmed) becomes the long help shown on the usage page.
    pub fn doc(mut self, text: &str) -> Self {
        let (short, long) = split_doc(text);
        self.short_help = short;
        self.long_help = long;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn short_help(&self) -> &str {
        &self.short_help
    }

    pub fn long_help(&self) -> &str {
        &self.long_help
    }

    pub fn mode(&self) -> ArgMode {
        self.handler.mode()
    }

    /// Declared flags for this command. Always contains `-h`/`--help`.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// `name|alias1|alias2`, as shown in usage lines.
    pub fn usage_names(&self) -> String {
        let mut names = self.name.clone();
        for alias in &self.aliases {
            names.push('|');
            names.push_str(alias);
        }
        names
    }

    /// `name, alias1, alias2`, as shown in the top-level listing.
    pub fn listed_names(&self) -> String {
        let mut names = self.name.clone();
        for alias in &self.aliases {
            names.push_str(", ");
            names.push_str(alias);
        }
        names
    }

    /// Run the handler with the data its shape asks for.
    pub(crate) fn invoke(&self, args: &[String], raw: &[String]) -> io::Result<()> {
        match &self.handler {
            Handler::NoArgs(run) => run(),
            Handler::Args(run) => run(args),
            Handler::ArgsAndRaw(run) => run(args, raw),
        }
    }
}

/// Split doc text into (short help, long help).
///
/// First non-empty line wins the short slot; everything after it is trimmed
/// line-by-line and stripped of outer blank lines, with internal paragraph
/// breaks preserved. No text at all yields the `No description.` fallback.
fn split_doc(text: &str) -> (String, String) {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return (NO_DESCRIPTION.to_string(), String::new());
    };
    let short = lines[first].to_string();

    let rest = &lines[first + 1..];
    let start = rest.iter().position(|line| !line.is_empty());
    let end = rest.iter().rposition(|line| !line.is_empty());
    let long = match (start, end) {
        (Some(start), Some(end)) => rest[start..=end].join("\n"),
        _ => String::new(),
    };

    (short, long)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undocumented_command_gets_fallback_help() {
        let cmd = Command::new("cmd", || Ok(()));
        assert_eq!(cmd.short_help(), "No description.");
        assert_eq!(cmd.long_help(), "");
    }

    #[test]
    fn test_one_line_doc_is_short_help_only() {
        let cmd = Command::new("cmd", || Ok(())).doc("A short description of the command.");
        assert_eq!(cmd.short_help(), "A short description of the command.");
        assert_eq!(cmd.long_help(), "");
    }

    #[test]
    fn test_indented_doc_is_dedented_and_split() {
        let text = "
            A short description of the command.

            This is extended help about the command. Fancy.
        ";
        let cmd = Command::new("cmd", || Ok(())).doc(text);
        assert_eq!(cmd.short_help(), "A short description of the command.");
        assert_eq!(
            cmd.long_help(),
            "This is extended help about the command. Fancy."
        );
    }

    #[test]
    fn test_long_help_keeps_paragraph_breaks() {
        let (short, long) = split_doc("Short.\n\nFirst paragraph.\n\nSecond paragraph.\n");
        assert_eq!(short, "Short.");
        assert_eq!(long, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_blank_doc_counts_as_missing() {
        let (short, long) = split_doc("   \n\n  ");
        assert_eq!(short, "No description.");
        assert_eq!(long, "");
    }

    #[test]
    fn test_mode_follows_handler_shape() {
        assert_eq!(Command::new("a", || Ok(())).mode(), ArgMode::None);
        assert_eq!(Command::with_args("b", |_| Ok(())).mode(), ArgMode::Args);
        assert_eq!(
            Command::with_raw_args("c", |_, _| Ok(())).mode(),
            ArgMode::ArgsAndRaw
        );
    }

    #[test]
    fn test_name_joins_for_usage_and_listing() {
        let cmd = Command::new("status", || Ok(())).alias("st").alias("s");
        assert_eq!(cmd.usage_names(), "status|st|s");
        assert_eq!(cmd.listed_names(), "status, st, s");

        let plain = Command::new("status", || Ok(()));
        assert_eq!(plain.usage_names(), "status");
        assert_eq!(plain.listed_names(), "status");
    }
}
