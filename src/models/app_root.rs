use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

use crate::services::paths::clean;

/// Name of the bundle configuration document inside `Contents/`.
pub const INFO_PLIST: &str = "Info.plist";

/// Directories derived from the launcher's own location.
///
/// The launcher lives at `<bundle>/Contents/MacOS/<launcher>`, so the three
/// ancestors are the platform-support directory, the bundle contents and the
/// bundle root. Every relative path in `Info.plist` is resolved against
/// [`ApplicationRoot::bundle_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRoot {
    launcher: Utf8PathBuf,
    platform_dir: Utf8PathBuf,
    contents_dir: Utf8PathBuf,
    bundle_dir: Utf8PathBuf,
}

impl ApplicationRoot {
    /// Derive the root from an absolute launcher path.
    pub fn from_launcher_path(launcher: &Utf8Path) -> Result<Self> {
        if !launcher.has_root() {
            return Err(anyhow!("Launcher path is not absolute: {}", launcher));
        }

        let launcher = clean(launcher);
        let platform_dir = parent_of(&launcher)?;
        let contents_dir = parent_of(&platform_dir)?;
        let bundle_dir = parent_of(&contents_dir)?;

        Ok(Self {
            launcher,
            platform_dir,
            contents_dir,
            bundle_dir,
        })
    }

    /// Derive the root from the process's invocation path.
    ///
    /// `argv[0]` is made absolute against the current directory. When the
    /// process was started without one, the OS-reported executable is used.
    pub fn from_invocation(argv0: Option<&str>) -> Result<Self> {
        let launcher = match argv0.map(str::trim).filter(|a| !a.is_empty()) {
            Some(arg) => {
                let path = Utf8PathBuf::from(arg);
                if path.has_root() {
                    path
                } else {
                    let cwd = std::env::current_dir()
                        .context("Failed to read the current directory")?;
                    let cwd = Utf8PathBuf::try_from(cwd)
                        .context("Current directory is not valid UTF-8")?;
                    cwd.join(path)
                }
            }
            None => {
                let exe = std::env::current_exe()
                    .context("Failed to determine the launcher executable")?;
                Utf8PathBuf::try_from(exe).context("Launcher path is not valid UTF-8")?
            }
        };

        Self::from_launcher_path(&launcher)
    }

    pub fn launcher(&self) -> &Utf8Path {
        &self.launcher
    }

    /// `<bundle>/Contents/MacOS`
    pub fn platform_dir(&self) -> &Utf8Path {
        &self.platform_dir
    }

    /// `<bundle>/Contents`
    pub fn contents_dir(&self) -> &Utf8Path {
        &self.contents_dir
    }

    /// `<bundle>`
    pub fn bundle_dir(&self) -> &Utf8Path {
        &self.bundle_dir
    }

    /// File name of the bundle directory, e.g. `MyApp.app`.
    pub fn bundle_file_name(&self) -> &str {
        self.bundle_dir.file_name().unwrap_or("javamaclauncher")
    }

    /// Bundle name without the `.app` extension; names the log directory.
    pub fn app_name(&self) -> &str {
        let name = self.bundle_file_name();
        name.strip_suffix(".app").unwrap_or(name)
    }

    /// Location of the bundle's `Info.plist`.
    pub fn info_plist_path(&self) -> Utf8PathBuf {
        self.contents_dir.join(INFO_PLIST)
    }
}

fn parent_of(path: &Utf8Path) -> Result<Utf8PathBuf> {
    path.parent()
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| anyhow!("Launcher is not located inside an application bundle: {}", path))
}
