//! Settings for the launcher itself, as opposed to the bundled application.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment prefix for launcher settings, e.g. `JAVAMACLAUNCHER_LOG_LEVEL`.
pub const SETTINGS_PREFIX: &str = "JAVAMACLAUNCHER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LauncherSettings {
    /// `EnvFilter` directive overriding the mode's default level.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Directory for the system-log backend instead of the platform default.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl LauncherSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(config::Environment::with_prefix(SETTINGS_PREFIX))
    }

    fn from_environment(environment: config::Environment) -> Result<Self> {
        config::Config::builder()
            .add_source(environment)
            .build()
            .context("Failed to read launcher settings")?
            .try_deserialize()
            .context("Failed to parse launcher settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_from(vars: &[(&str, &str)]) -> LauncherSettings {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LauncherSettings::from_environment(
            config::Environment::with_prefix(SETTINGS_PREFIX).source(Some(source)),
        )
        .unwrap()
    }

    #[test]
    fn test_no_settings() {
        assert_eq!(settings_from(&[]), LauncherSettings::default());
    }

    #[test]
    fn test_settings_from_environment() {
        let settings = settings_from(&[
            ("JAVAMACLAUNCHER_LOG_LEVEL", "trace"),
            ("JAVAMACLAUNCHER_LOG_DIR", "/tmp/launcher-logs"),
            ("UNRELATED", "ignored"),
        ]);

        assert_eq!(settings.log_level.as_deref(), Some("trace"));
        assert_eq!(settings.log_dir.as_deref(), Some("/tmp/launcher-logs"));
    }
}
