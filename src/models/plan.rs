use camino::Utf8PathBuf;
use indexmap::IndexMap;

/// Environment variable exported to the child when a runtime home is known.
pub const RUNTIME_HOME_VAR: &str = "JAVA_HOME";

/// How the runtime process is run relative to the launcher.
///
/// Chosen once before the child starts and never switched afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// The launcher waits for the child to exit.
    Foreground {
        /// Pipe the child's stdout/stderr into buffers (diagnostic mode only).
        capture_output: bool,
    },

    /// The launcher starts the child and returns without waiting.
    Background,
}

impl ExecutionMode {
    /// Select the mode from the diagnostic flag and `LaunchInForeground`.
    pub fn select(diagnostic: bool, launch_in_foreground: bool) -> Self {
        if diagnostic || launch_in_foreground {
            Self::Foreground {
                capture_output: diagnostic,
            }
        } else {
            Self::Background
        }
    }

    pub fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground { .. })
    }
}

/// Fully resolved runtime invocation.
///
/// A plan only exists when resolution succeeded, so every path in it is
/// absolute and lexically clean, and the executable names an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLaunchPlan {
    pub runtime_home: Option<Utf8PathBuf>,
    pub runtime_executable: Utf8PathBuf,
    pub working_directory: Utf8PathBuf,
    pub arguments: Vec<String>,
    /// Overrides applied on top of the inherited environment.
    pub environment: IndexMap<String, String>,
    pub mode: ExecutionMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert_eq!(ExecutionMode::select(false, false), ExecutionMode::Background);
        assert_eq!(
            ExecutionMode::select(false, true),
            ExecutionMode::Foreground {
                capture_output: false
            }
        );
        assert_eq!(
            ExecutionMode::select(true, false),
            ExecutionMode::Foreground {
                capture_output: true
            }
        );
        assert!(ExecutionMode::select(true, true).is_foreground());
    }
}
