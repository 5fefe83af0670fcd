use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::IsTerminal;
use tracing::dispatcher::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LauncherSettings;

/// Where diagnostic output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBackend {
    /// stderr, used in diagnostic (`debug`) mode.
    Console,
    /// Daily rotating file in the user's log directory.
    SystemLog,
}

impl LogBackend {
    pub fn for_mode(diagnostic: bool) -> Self {
        if diagnostic { Self::Console } else { Self::SystemLog }
    }

    fn default_level(&self) -> &'static str {
        match self {
            Self::Console => "debug",
            Self::SystemLog => "info",
        }
    }
}

/// Logging handle for one launcher run.
///
/// The subscriber is installed as the default for the current thread while
/// the handle is alive. Dropping it flushes the file writer, so the handle
/// must outlive every fatal report.
pub struct Diagnostics {
    backend: LogBackend,
    log_dir: Option<Utf8PathBuf>,
    _subscriber: DefaultGuard,
    _writer: Option<WorkerGuard>,
}

impl Diagnostics {
    /// Set up logging for `backend`.
    ///
    /// # Arguments
    /// * `backend` - Console or system log
    /// * `settings` - Optional level and directory overrides
    /// * `app_name` - Names the log directory and file prefix
    ///
    /// Falls back to the console when the log directory cannot be created.
    pub fn init(backend: LogBackend, settings: &LauncherSettings, app_name: &str) -> Self {
        let filter = build_filter(backend, settings.log_level.as_deref());

        if backend == LogBackend::SystemLog {
            let log_dir = settings
                .log_dir
                .as_deref()
                .map(Utf8PathBuf::from)
                .or_else(|| default_log_dir(app_name));

            match log_dir.map(|dir| prepare_log_dir(&dir).map(|()| dir)) {
                Some(Ok(dir)) => return Self::system_log(filter, dir, app_name),
                Some(Err(e)) => {
                    let diagnostics = Self::console(filter);
                    tracing::warn!("System log unavailable, logging to console: {}", e);
                    return diagnostics;
                }
                None => {
                    let diagnostics = Self::console(filter);
                    tracing::warn!("No log directory available, logging to console");
                    return diagnostics;
                }
            }
        }

        Self::console(filter)
    }

    fn console(filter: EnvFilter) -> Self {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        );

        Self {
            backend: LogBackend::Console,
            log_dir: None,
            _subscriber: subscriber.set_default(),
            _writer: None,
        }
    }

    fn system_log(filter: EnvFilter, log_dir: Utf8PathBuf, app_name: &str) -> Self {
        let file_appender = rolling::daily(&log_dir, format!("{}.log", app_name));
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        );

        Self {
            backend: LogBackend::SystemLog,
            log_dir: Some(log_dir),
            _subscriber: subscriber.set_default(),
            _writer: Some(guard),
        }
    }

    pub fn backend(&self) -> LogBackend {
        self.backend
    }

    /// Directory of the log files, `None` for the console backend.
    pub fn log_dir(&self) -> Option<&Utf8Path> {
        self.log_dir.as_deref()
    }

    /// Log a fatal error with its full cause chain.
    pub fn report_fatal(&self, error: &anyhow::Error) {
        tracing::error!("{:#}", error);
    }
}

/// `~/Library/Logs/<app>` on macOS, `<data-local-dir>/<app>/logs` elsewhere.
pub fn default_log_dir(app_name: &str) -> Option<Utf8PathBuf> {
    let dir = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|home| home.join("Library").join("Logs").join(app_name))
    } else {
        dirs::data_local_dir().map(|data| data.join(app_name).join("logs"))
    };

    dir.and_then(|d| Utf8PathBuf::try_from(d).ok())
}

fn prepare_log_dir(log_dir: &Utf8Path) -> std::io::Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }
    Ok(())
}

fn build_filter(backend: LogBackend, directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(backend.default_level()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_log_dir() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();
        (temp_dir, log_dir)
    }

    #[test]
    fn test_backend_for_mode() {
        assert_eq!(LogBackend::for_mode(true), LogBackend::Console);
        assert_eq!(LogBackend::for_mode(false), LogBackend::SystemLog);
    }

    #[test]
    fn test_console_backend() {
        let diagnostics = Diagnostics::init(LogBackend::Console, &LauncherSettings::default(), "test");
        assert_eq!(diagnostics.backend(), LogBackend::Console);
        assert_eq!(diagnostics.log_dir(), None);
    }

    #[test]
    fn test_system_log_creates_directory() {
        let (_temp_dir, log_dir) = temp_log_dir();
        let settings = LauncherSettings {
            log_dir: Some(log_dir.to_string()),
            ..Default::default()
        };

        let diagnostics = Diagnostics::init(LogBackend::SystemLog, &settings, "test");

        assert_eq!(diagnostics.backend(), LogBackend::SystemLog);
        assert_eq!(diagnostics.log_dir(), Some(log_dir.as_path()));
        assert!(log_dir.exists());
    }

    #[test]
    fn test_system_log_falls_back_to_console() {
        let (_temp_dir, log_dir) = temp_log_dir();
        // A regular file where the directory should go.
        fs::write(&log_dir, b"").unwrap();

        let settings = LauncherSettings {
            log_dir: Some(log_dir.join("nested").to_string()),
            ..Default::default()
        };

        let diagnostics = Diagnostics::init(LogBackend::SystemLog, &settings, "test");
        assert_eq!(diagnostics.backend(), LogBackend::Console);
    }

    #[test]
    fn test_level_override() {
        assert_eq!(build_filter(LogBackend::SystemLog, Some("warn")).to_string(), "warn");
        assert_eq!(build_filter(LogBackend::SystemLog, None).to_string(), "info");
        assert_eq!(build_filter(LogBackend::Console, None).to_string(), "debug");
    }
}
