// JavaMacLauncher - native launcher for Java applications packaged as macOS bundles
//
// This is the library crate containing configuration resolution and launch logic.
// The binary crate (main.rs) provides the executable entry point.

pub mod config;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{BundleDocument, DocumentError, LauncherSettings};
pub use logging::{Diagnostics, LogBackend};
pub use models::{ApplicationRoot, ExecutionMode, InfoPlist, LauncherConfig, ResolvedLaunchPlan};
pub use services::{ExecutionError, LaunchExecutor, LaunchPlanner, ResolveError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Command-line token that switches the launcher into diagnostic mode.
pub const DIAGNOSTIC_TOKEN: &str = "debug";

/// Whether any argument (excluding `argv[0]`) requests diagnostic mode.
///
/// Matching ignores case and surrounding whitespace.
pub fn is_diagnostic_mode<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| arg.as_ref().trim().eq_ignore_ascii_case(DIAGNOSTIC_TOKEN))
}
