//! Sample application for the dispatch engine.
//!
//! Small enough to read in one sitting, but it exercises every handler shape
//! and every terminal outcome, so the e2e suite drives the engine through
//! this binary exactly the way a real application would.

use std::io;

use subcmd::{App, Command, RegistrationConflict};

fn build() -> Result<App, RegistrationConflict> {
    let mut app = App::new("demo")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_description("Sample application for the subcmd dispatch engine.");

    app.register(
        Command::new("hello", || {
            println!("Hello, world!");
            Ok(())
        })
        .doc("Print a friendly greeting."),
    )?;

    app.register(
        Command::with_raw_args("echo", |args, argv| {
            println!("{}", args.join(" "));
            println!("{}", argv.join(" "));
            Ok(())
        })
        .alias("e")
        .doc("Echo positional arguments.\n\n\
              Prints the leftover positionals on one line, then the raw\n\
              vector exactly as the dispatcher received it."),
    )?;

    app.register(
        Command::with_args("count", |args| {
            println!("{}", args.len());
            Ok(())
        })
        .doc("Print the number of positional arguments."),
    )?;

    app.register(
        Command::new("fail", || Err(io::Error::other("induced failure")))
            .doc("Exit through the error path."),
    )?;

    Ok(app)
}

fn main() -> io::Result<()> {
    build().map_err(io::Error::other)?.main()
}
