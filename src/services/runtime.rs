//! Java runtime discovery.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::host::{HostEnvironment, JAVA_HOME_UTILITY};
use crate::models::{LauncherConfig, Platform, RUNTIME_HOME_VAR};
use crate::services::paths::{clean, resolve_path};

/// Base name of the runtime binary below `<runtime-home>/bin`.
pub const RUNTIME_BINARY: &str = "java";

/// Errors that can occur while resolving the runtime or working directory
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unable to obtain java home.")]
    RuntimeHomeNotFound,

    #[error("Can't find a Java command.")]
    RuntimeCommandNotFound,

    #[error("Java command does not point to a file: {0}")]
    RuntimeCommandNotAFile(Utf8PathBuf),

    #[error("Unable to determine the user's home directory")]
    HomeDirectoryUnavailable,
}

/// Runtime home and executable after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuntime {
    pub home: Option<Utf8PathBuf>,
    pub executable: Utf8PathBuf,
}

/// Finds the runtime from explicit configuration or by autodetection.
pub struct RuntimeLocator<'a> {
    host: &'a dyn HostEnvironment,
    platform: Platform,
}

impl<'a> RuntimeLocator<'a> {
    pub fn new(host: &'a dyn HostEnvironment, platform: Platform) -> Self {
        Self { host, platform }
    }

    /// Autodetect the runtime home.
    ///
    /// `JAVA_HOME` wins; on macOS `/usr/libexec/java_home` is asked next.
    /// The result is cleaned but may still be relative.
    pub fn locate_runtime_home(&self) -> Option<Utf8PathBuf> {
        if let Some(home) = self.host.var(RUNTIME_HOME_VAR) {
            let home = home.trim();
            if !home.is_empty() {
                tracing::debug!("Java home from {}: {}", RUNTIME_HOME_VAR, home);
                return Some(clean(Utf8Path::new(home)));
            }
        }

        if self.platform.has_java_home_utility {
            if let Some(output) = self.host.command_output(&JAVA_HOME_UTILITY) {
                let home = output.trim();
                if !home.is_empty() {
                    tracing::debug!("Java home from {}: {}", JAVA_HOME_UTILITY.program, home);
                    return Some(clean(Utf8Path::new(home)));
                }
            }
        }

        None
    }

    /// Resolve runtime home and executable for `config`.
    ///
    /// Autodetection only runs when neither `JavaHome` nor `JavaCommand` is
    /// configured. A relative detected home is resolved against `root` like
    /// any configured path. A missing executable, or one that is not an
    /// existing file, is an error.
    pub fn resolve(
        &self,
        config: &LauncherConfig,
        root: &Utf8Path,
    ) -> Result<ResolvedRuntime, ResolveError> {
        let mut home = resolve_path(&config.java_home, root);
        let mut executable = resolve_path(&config.java_command, root);

        if home.is_none() && executable.is_none() {
            let detected = self
                .locate_runtime_home()
                .ok_or(ResolveError::RuntimeHomeNotFound)?;
            home = resolve_path(detected.as_str(), root);
        }

        if executable.is_none() {
            executable = home.as_deref().map(runtime_binary_path);
        }

        let executable = executable.ok_or(ResolveError::RuntimeCommandNotFound)?;
        if !self.host.is_file(&executable) {
            return Err(ResolveError::RuntimeCommandNotAFile(executable));
        }

        Ok(ResolvedRuntime { home, executable })
    }
}

/// `<home>/bin/java` (with the platform's executable suffix).
pub fn runtime_binary_path(home: &Utf8Path) -> Utf8PathBuf {
    clean(
        &home
            .join("bin")
            .join(format!("{}{}", RUNTIME_BINARY, std::env::consts::EXE_SUFFIX)),
    )
}
