//! JavaMacLauncher - native launcher for Java applications in macOS bundles
//!
//! Main entry point of the launcher executable.
//!
//! # Execution Flow
//!
//! 1. Detect diagnostic mode (`debug` argument)
//! 2. Derive the bundle layout from the launcher's own path
//! 3. Initialize logging (console in diagnostic mode, log file otherwise)
//! 4. Load `Contents/Info.plist`
//! 5. Resolve the launch plan (runtime, working directory, arguments, mode)
//! 6. Start the Java process in foreground or background mode
//!
//! Any fatal condition is logged and ends the launcher with exit code 1.

use anyhow::{Context, Result};
use javamaclauncher::host::SystemHost;
use javamaclauncher::models::Platform;
use javamaclauncher::{
    APP_NAME, ApplicationRoot, BundleDocument, Diagnostics, LaunchExecutor, LaunchPlanner,
    LauncherSettings, LogBackend, VERSION,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let diagnostic = javamaclauncher::is_diagnostic_mode(args.iter().skip(1));

    let root = ApplicationRoot::from_invocation(args.first().map(String::as_str));
    let (settings, settings_error) = match LauncherSettings::from_env() {
        Ok(settings) => (settings, None),
        Err(e) => (LauncherSettings::default(), Some(e)),
    };

    let app_name = root
        .as_ref()
        .map(|r| r.app_name().to_string())
        .unwrap_or_else(|_| APP_NAME.to_string());
    let diagnostics = Diagnostics::init(LogBackend::for_mode(diagnostic), &settings, &app_name);

    tracing::info!("Entering JavaMacLauncher v{}...", VERSION);
    if diagnostic {
        tracing::info!("Running in debug mode.");
    }
    if let Some(e) = settings_error {
        tracing::warn!("Ignoring launcher settings: {:#}", e);
    }

    match root.and_then(|root| run(&root, diagnostic)) {
        Ok(()) => {
            tracing::info!("Exiting JavaMacLauncher. Have a nice day!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            diagnostics.report_fatal(&e);
            ExitCode::from(1)
        }
    }
}

fn run(root: &ApplicationRoot, diagnostic: bool) -> Result<()> {
    tracing::info!("Bundle: {}", root.bundle_dir());

    let info = BundleDocument::for_root(root).load()?;

    let planner = LaunchPlanner::new(&SystemHost, Platform::host());
    let plan = planner.plan(&info, root, diagnostic)?;

    // Current-thread runtime: the only async work is driving the child process.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create the process runtime")?;

    runtime.block_on(LaunchExecutor::new().execute(&plan))?;
    Ok(())
}
