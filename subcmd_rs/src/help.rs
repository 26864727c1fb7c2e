//! Help text rendering.
//!
//! Three renderers, all writing to a caller-supplied sink so tests can hold
//! the bytes: the top-level command listing, one command's usage page, and
//! the usage-error banner that wraps an option parser complaint. Layout is
//! part of the engine's contract and is matched byte-for-byte by the test
//! suite, trailing blank lines included.

use std::io::{self, Write};

use crate::app::App;
use crate::command::Command;
use crate::options::{Flag, OptionSet};

/// Render the top-level summary: header, command listing, footer hints.
///
/// Commands are sorted ascending by primary name and appear once each, with
/// aliases comma-joined in registration order.
pub fn top_level(app: &App, out: &mut dyn Write) -> io::Result<()> {
    let mut header = app.name().to_string();
    if let Some(version) = app.version() {
        header.push(' ');
        header.push_str(version);
    }
    if let Some(description) = app.description() {
        header.push_str(" -- ");
        header.push_str(description);
    }
    writeln!(out, "{header}")?;
    writeln!(out, "Basic usage: {} <subcommand> [options]", app.name())?;
    writeln!(out)?;

    let mut commands: Vec<&Command> = app.commands().collect();
    commands.sort_by(|a, b| a.name().cmp(b.name()));
    for cmd in commands {
        writeln!(out, "{}", cmd.listed_names())?;
        writeln!(out, "    {}", cmd.short_help())?;
        writeln!(out)?;
    }

    writeln!(out, "`{} <command> -h` for command help", app.name())?;
    if app.version().is_some() {
        writeln!(out, "`{} --version` prints version and exits", app.name())?;
    }
    Ok(())
}

/// Render one command's usage page (the `-h` output).
///
/// The block after the options always closes with a section for the long
/// help (possibly empty) and a final terminator, so a doc-less page still
/// ends in two blank lines.
pub fn command_page(app: &App, cmd: &Command, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage: {} {} [options]", app.name(), cmd.usage_names())?;
    writeln!(out)?;
    writeln!(out, "{}", cmd.short_help())?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    for line in option_lines(cmd.options()) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    if !cmd.long_help().is_empty() {
        writeln!(out, "{}", cmd.long_help())?;
    }
    writeln!(out)?;
    Ok(())
}

/// The stderr banner for a rejected invocation of a known command.
pub fn usage_error(
    app: &App,
    cmd: &Command,
    message: &str,
    err: &mut dyn Write,
) -> io::Result<()> {
    writeln!(err, "Usage: {} {} [options]", app.name(), cmd.usage_names())?;
    writeln!(err)?;
    writeln!(err, "{}: error: {}", app.name(), message)?;
    Ok(())
}

/// Option rows with the flag column aligned across the set.
fn option_lines(options: &OptionSet) -> Vec<String> {
    let labels: Vec<String> = options.flags().iter().map(Flag::label).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);
    labels
        .iter()
        .zip(options.flags())
        .map(|(label, flag)| format!("  {label:<width$}  {}", flag.help()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
