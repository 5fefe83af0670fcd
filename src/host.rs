//! Narrow probes into the host machine.
//!
//! Resolution logic never touches the process environment, the filesystem or
//! system utilities directly; it goes through [`HostEnvironment`] so the
//! whole chain can be driven with fakes in tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::process::{Command, Stdio};

/// A system utility invoked once with fixed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Prints the home directory of the preferred installed JDK on macOS.
pub const JAVA_HOME_UTILITY: HostCommand = HostCommand {
    program: "/usr/libexec/java_home",
    args: &[],
};

/// Prints the user's preferred languages as a property-list array on macOS.
pub const PREFERRED_LANGUAGES_UTILITY: HostCommand = HostCommand {
    program: "/usr/bin/defaults",
    args: &["read", "-g", "AppleLanguages"],
};

/// Prints the user's locale identifier (e.g. `de_DE`) on macOS.
pub const USER_LOCALE_UTILITY: HostCommand = HostCommand {
    program: "/usr/bin/osascript",
    args: &["-e", "user locale of (get system info)"],
};

/// Host facts consumed during resolution.
#[cfg_attr(test, mockall::automock)]
pub trait HostEnvironment {
    /// Value of an environment variable, `None` when unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `path` exists and is not a directory.
    fn is_file(&self, path: &Utf8Path) -> bool;

    /// The current user's home directory.
    fn home_dir(&self) -> Option<Utf8PathBuf>;

    /// Combined stdout/stderr of `command` when it exits successfully.
    fn command_output(&self, command: &HostCommand) -> Option<String>;
}

/// [`HostEnvironment`] backed by the real process and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostEnvironment for SystemHost {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn is_file(&self, path: &Utf8Path) -> bool {
        path.metadata().map(|m| !m.is_dir()).unwrap_or(false)
    }

    fn home_dir(&self) -> Option<Utf8PathBuf> {
        dirs::home_dir().and_then(|p| Utf8PathBuf::try_from(p).ok())
    }

    fn command_output(&self, command: &HostCommand) -> Option<String> {
        let output = match Command::new(command.program)
            .args(command.args)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", command.program, e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!("{} exited with {}", command.program, output.status);
            return None;
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Some(text)
    }
}
