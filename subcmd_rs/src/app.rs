//! The per-application command registry and its entry points.
//!
//! An [`App`] is built once during startup: metadata first, then one
//! [`register`](App::register) call per command. After that it is read-only;
//! [`run`](App::run) and [`main`](App::main) only ever take `&self`, so one
//! registry can serve any number of invocations.

use std::collections::HashMap;
use std::io::{self, Write};
use std::process;

use thiserror::Error;

use crate::command::Command;
use crate::{dispatch, shell};

/// Rejected registration: the name or alias is already taken, possibly by
/// the reserved `shell`/`sh` built-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("name or alias `{name}` is already registered")]
pub struct RegistrationConflict {
    pub name: String,
}

/// One application: identity metadata plus the command registry.
///
/// Every name and alias maps to exactly one descriptor; descriptors own
/// their handlers and are owned by the registry that accepted them.
pub struct App {
    name: String,
    version: Option<String>,
    description: Option<String>,
    commands: Vec<Command>,
    lookup: HashMap<String, usize>,
}

impl App {
    /// A fresh registry. Already holds the built-in shell entry, so `shell`
    /// and `sh` are taken before the application registers anything.
    pub fn new(name: impl Into<String>) -> Self {
        let mut app = Self {
            name: name.into(),
            version: None,
            description: None,
            commands: Vec::new(),
            lookup: HashMap::new(),
        };
        app.insert(shell::builtin());
        app
    }

    /// Set the version string. Enables the top-level `--version` flag and
    /// the matching footer line in the listing.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description shown in the top-level header.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Register one command.
    ///
    /// The command's name and every alias are checked against all existing
    /// keys (and against each other) before anything is inserted, so a
    /// conflict is reported at registration time and leaves the registry
    /// untouched.
    pub fn register(&mut self, cmd: Command) -> Result<(), RegistrationConflict> {
        let mut staged: Vec<&str> = Vec::with_capacity(1 + cmd.aliases().len());
        for key in
            std::iter::once(cmd.name()).chain(cmd.aliases().iter().map(String::as_str))
        {
            if self.lookup.contains_key(key) || staged.contains(&key) {
                return Err(RegistrationConflict {
                    name: key.to_string(),
                });
            }
            staged.push(key);
        }
        self.insert(cmd);
        Ok(())
    }

    // Caller has already established that none of the keys exist.
    fn insert(&mut self, cmd: Command) {
        let index = self.commands.len();
        self.lookup.insert(cmd.name().to_string(), index);
        for alias in cmd.aliases() {
            self.lookup.insert(alias.clone(), index);
        }
        self.commands.push(cmd);
    }

    /// Look up a command by name or alias. Exact match only.
    pub fn resolve(&self, token: &str) -> Option<&Command> {
        self.lookup.get(token).map(|&index| &self.commands[index])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All descriptors in registration order (the help renderer sorts).
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Process one argument vector (the tokens after the program name)
    /// against the caller's sinks. Returns the exit code; handler errors
    /// pass through unchanged.
    pub fn run(
        &self,
        argv: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<i32> {
        dispatch::run(self, argv, out, err)
    }

    /// Process-level convenience: dispatch `env::args`, wired to the real
    /// stdout/stderr, exiting the process on a non-zero code.
    pub fn main(&self) -> io::Result<()> {
        let argv: Vec<String> = std::env::args().skip(1).collect();
        let code = self.run(&argv, &mut io::stdout(), &mut io::stderr())?;
        if code != 0 {
            process::exit(code);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
