//! Data models for the launcher.
//!
//! - [`InfoPlist`] / [`LauncherConfig`]: the decoded bundle configuration, read-only after load
//! - [`ApplicationRoot`]: bundle directories derived from the launcher's own location
//! - [`ResolvedLaunchPlan`]: the resolved runtime invocation handed to the executor
//! - [`Platform`]: host traits that change argument assembly (dock options, path-list separator)

pub mod app_root;
pub mod config;
pub mod plan;
pub mod platform;

pub use app_root::ApplicationRoot;
pub use config::{DEFAULT_DOCK_NAME_KEY, InfoPlist, LauncherConfig};
pub use plan::{ExecutionMode, RUNTIME_HOME_VAR, ResolvedLaunchPlan};
pub use platform::Platform;
