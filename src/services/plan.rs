//! Turns the bundle configuration and host facts into a [`ResolvedLaunchPlan`].

use camino::Utf8PathBuf;
use indexmap::IndexMap;

use crate::host::HostEnvironment;
use crate::models::{
    ApplicationRoot, ExecutionMode, InfoPlist, Platform, RUNTIME_HOME_VAR, ResolvedLaunchPlan,
};
use crate::services::arguments::{assemble_arguments, dock_name_needs_locale};
use crate::services::locale::LocaleResolver;
use crate::services::paths::resolve_path;
use crate::services::runtime::{ResolveError, RuntimeLocator};

/// Resolves a complete launch plan.
///
/// Runtime lookup, working directory, environment overrides, arguments and
/// execution mode are settled here; nothing is started.
pub struct LaunchPlanner<'a> {
    host: &'a dyn HostEnvironment,
    platform: Platform,
    locales: LocaleResolver,
}

impl<'a> LaunchPlanner<'a> {
    /// Planner with the locale strategies `platform` supports.
    pub fn new(host: &'a dyn HostEnvironment, platform: Platform) -> Self {
        Self::with_locales(host, platform, LocaleResolver::for_platform(platform))
    }

    pub fn with_locales(
        host: &'a dyn HostEnvironment,
        platform: Platform,
        locales: LocaleResolver,
    ) -> Self {
        Self {
            host,
            platform,
            locales,
        }
    }

    pub fn plan(
        &self,
        info: &InfoPlist,
        root: &ApplicationRoot,
        diagnostic: bool,
    ) -> Result<ResolvedLaunchPlan, ResolveError> {
        let config = &info.launcher;
        let bundle_dir = root.bundle_dir();

        let runtime = RuntimeLocator::new(self.host, self.platform).resolve(config, bundle_dir)?;

        let mut environment = IndexMap::new();
        if let Some(home) = &runtime.home {
            tracing::info!("Java home: {}", home);
            environment.insert(RUNTIME_HOME_VAR.to_string(), home.to_string());
        }
        tracing::info!("Java command: {}", runtime.executable);

        let working_directory = self.working_directory(&config.working_directory, root)?;
        tracing::info!("Working directory: {}", working_directory);

        // The locale only matters for dock-name selection.
        let locale = if self.platform.has_dock && dock_name_needs_locale(info) {
            self.locales.resolve(self.host)
        } else {
            None
        };

        let arguments = assemble_arguments(info, bundle_dir, self.platform, locale.as_deref());
        tracing::info!("Java arguments: {:?}", arguments);

        let mode = ExecutionMode::select(diagnostic, config.launch_in_foreground);
        tracing::debug!("Execution mode: {:?}", mode);

        Ok(ResolvedLaunchPlan {
            runtime_home: runtime.home,
            runtime_executable: runtime.executable,
            working_directory,
            arguments,
            environment,
            mode,
        })
    }

    /// Configured working directory, or the user's home directory when unset.
    fn working_directory(
        &self,
        configured: &str,
        root: &ApplicationRoot,
    ) -> Result<Utf8PathBuf, ResolveError> {
        match resolve_path(configured, root.bundle_dir()) {
            Some(path) => Ok(path),
            None => self
                .host
                .home_dir()
                .ok_or(ResolveError::HomeDirectoryUnavailable),
        }
    }
}
