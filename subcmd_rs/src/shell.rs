//! The reserved `shell` slot.
//!
//! Every registry lists an interactive command shell under `shell`/`sh`. The
//! REPL itself ships as a separate front-end; the engine only guarantees that
//! the two names stay reserved and that the entry shows up in listings.

use crate::command::Command;

pub(crate) const SHELL_HELP: &str = "A command shell for this application.";

/// The descriptor inserted into every fresh registry, ahead of any user
/// registration, so application commands can never claim `shell` or `sh`.
pub(crate) fn builtin() -> Command {
    Command::new("shell", || Ok(())).alias("sh").doc(SHELL_HELP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ArgMode;

    #[test]
    fn test_builtin_descriptor_shape() {
        let cmd = builtin();
        assert_eq!(cmd.name(), "shell");
        assert_eq!(cmd.aliases(), vec!["sh"]);
        assert_eq!(cmd.short_help(), SHELL_HELP);
        assert_eq!(cmd.mode(), ArgMode::None);
    }
}
