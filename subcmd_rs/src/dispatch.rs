//! The dispatcher: one argument vector in, one terminal outcome out.
//!
//! Every invocation walks the same ladder: the top-level `--version` check,
//! the no-command and unknown-command fallbacks to the listing, option
//! parsing for the resolved command, the help short-circuit, and finally the
//! handler call with whatever its shape asks for. Each rung returns, so no
//! state survives between invocations.
//!
//! Exit codes: 0 for anything that ran or printed help, 1 for an unknown
//! command, 2 for an option-parsing error.

use std::io::{self, Write};

use crate::app::App;
use crate::help;

pub(crate) fn run(
    app: &App,
    argv: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let first = argv.first().map(String::as_str);

    // `--version` is special only as the very first token, and only when the
    // application actually carries a version. Without one it falls through as
    // "no command selected" rather than becoming an error.
    if first == Some("--version") {
        if let Some(version) = app.version() {
            writeln!(out, "{version}")?;
            return Ok(0);
        }
        help::top_level(app, out)?;
        return Ok(0);
    }

    let Some(token) = first else {
        help::top_level(app, out)?;
        return Ok(0);
    };

    let Some(cmd) = app.resolve(token) else {
        help::top_level(app, out)?;
        // The listing must be complete on stdout before the error line lands.
        out.flush()?;
        writeln!(err, "error: unknown command {token}")?;
        return Ok(1);
    };

    let matches = match cmd.options().parse(&argv[1..]) {
        Ok(matches) => matches,
        Err(usage) => {
            help::usage_error(app, cmd, &usage.0, err)?;
            return Ok(2);
        }
    };

    if matches.has("help") {
        help::command_page(app, cmd, out)?;
        return Ok(0);
    }

    cmd.invoke(&matches.args, argv)?;
    Ok(0)
}
