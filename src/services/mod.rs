//! Services module - resolution and launch logic.
//!
//! Everything between the decoded `Info.plist` and the running Java process:
//!
//! - [`paths`]: normalizes configured paths against the bundle root
//! - [`locale`]: finds the user locale through an ordered chain of [`LocaleProvider`]s
//! - [`runtime`]: resolves Java home and the Java command, with autodetection
//! - [`arguments`]: assembles the ordered runtime argument vector (heap, splash,
//!   dock, class/module path, application command and arguments)
//! - [`plan`]: combines the above into a [`ResolvedLaunchPlan`](crate::models::ResolvedLaunchPlan)
//! - [`launch`]: runs a plan in foreground or background mode
//!
//! Only [`launch`] has side effects beyond the probes made through
//! [`HostEnvironment`](crate::host::HostEnvironment).
//!
//! # Usage Example
//!
//! ```ignore
//! use javamaclauncher::host::SystemHost;
//! use javamaclauncher::models::Platform;
//! use javamaclauncher::services::{LaunchExecutor, LaunchPlanner};
//!
//! let planner = LaunchPlanner::new(&SystemHost, Platform::host());
//! let plan = planner.plan(&info, &root, false)?;
//! LaunchExecutor::new().execute(&plan).await?;
//! ```

pub mod arguments;
pub mod launch;
pub mod locale;
pub mod paths;
pub mod plan;
pub mod runtime;

pub use arguments::{assemble_arguments, dock_name_needs_locale, resolve_dock_name};
pub use launch::{ExecutionError, LaunchExecutor};
pub use locale::{LocaleProvider, LocaleResolver, normalize_locale};
pub use paths::{clean, resolve_path};
pub use plan::LaunchPlanner;
pub use runtime::{ResolveError, ResolvedRuntime, RuntimeLocator};
