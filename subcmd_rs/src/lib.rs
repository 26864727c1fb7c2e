//! # subcmd
//!
//! **Subcommand dispatch for CLI applications** - register handler functions
//! as named commands, hand the argument vector to one entry point, and get
//! git-style verb dispatch with exact, predictable help text.
//!
//! ## Features
//!
//! - **Registry** - per-application command table with eager name/alias
//!   conflict detection and a reserved `shell`/`sh` slot
//! - **Dispatch** - resolves the first token, parses the rest through the
//!   command's flag set, injects positionals per the handler's shape
//! - **Help engine** - top-level listing and per-command usage pages rendered
//!   byte-for-byte the same on every run
//! - **No ambient state** - an [`App`] is a plain value; build it, then
//!   dispatch against `&self` as often as you like
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use subcmd::{App, Command};
//!
//! let mut app = App::new("greet").with_version("1.0");
//! app.register(
//!     Command::new("hello", || {
//!         println!("Hello, world!");
//!         Ok(())
//!     })
//!     .doc("Print a friendly greeting."),
//! )?;
//!
//! let argv = vec!["--version".to_string()];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = app.run(&argv, &mut out, &mut err)?;
//! assert_eq!(code, 0);
//! assert_eq!(out, b"1.0\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Binary Usage
//!
//! A binary wires the same registry to the real process:
//!
//! ```rust,no_run
//! use subcmd::App;
//!
//! fn main() -> std::io::Result<()> {
//!     let app = App::new("myapp");
//!     app.main()
//! }
//! ```
//!
//! Handlers come in three shapes - no arguments, leftover positionals, or
//! positionals plus the raw vector - and the shape picked at registration is
//! the only contract dispatch relies on. See [`Command`] for the three
//! constructors.

#![doc(html_root_url = "https://docs.rs/subcmd/0.1.0")]

// ============================================================================
// Modules
// ============================================================================

/// The per-application registry and its `run`/`main` entry points.
pub mod app;

/// Command descriptors, handler shapes and doc-text splitting.
pub mod command;

/// Help rendering: listing, usage pages, usage-error banner.
pub mod help;

/// The flag-parsing collaborator used for per-command options.
pub mod options;

mod dispatch;
mod shell;

// Re-export main types for convenience
pub use app::{App, RegistrationConflict};
pub use command::{ArgMode, Command, Handler, NO_DESCRIPTION};
pub use options::{Flag, Matches, OptionSet, UsageError};
