use indexmap::IndexMap;
use serde::Deserialize;

/// Key of the `DockName` entry used when no locale-specific name matches.
pub const DEFAULT_DOCK_NAME_KEY: &str = "default";

/// Top-level keys of the bundle's `Info.plist`.
///
/// Only the keys the launcher reads are modelled; everything else in the
/// document is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InfoPlist {
    #[serde(rename = "CFBundleName", default)]
    pub bundle_name: String,

    #[serde(rename = "CFBundleDisplayName", default)]
    pub bundle_display_name: String,

    #[serde(rename = "CFBundleVersion", default)]
    pub bundle_version: String,

    #[serde(rename = "CFBundleIconFile", default)]
    pub bundle_icon_file: String,

    #[serde(rename = "JavaMacLauncher", default)]
    pub launcher: LauncherConfig,
}

/// The `JavaMacLauncher` dictionary inside `Info.plist`.
///
/// Contains runtime selection, class/module path, heap sizing and the
/// application command. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    #[serde(rename = "JavaHome")]
    pub java_home: String,

    #[serde(rename = "JavaCommand")]
    pub java_command: String,

    #[serde(rename = "JavaOptions")]
    pub java_options: Vec<String>,

    #[serde(rename = "JavaClassPath")]
    pub java_class_path: Vec<String>,

    #[serde(rename = "JavaModulePath")]
    pub java_module_path: Vec<String>,

    #[serde(rename = "WorkingDirectory")]
    pub working_directory: String,

    #[serde(rename = "ApplicationCommand")]
    pub application_command: String,

    #[serde(rename = "ApplicationArguments")]
    pub application_arguments: Vec<String>,

    #[serde(rename = "HeapMinimum")]
    pub heap_minimum: String,

    #[serde(rename = "HeapMaximum")]
    pub heap_maximum: String,

    #[serde(rename = "SplashImage")]
    pub splash_image: String,

    /// Locale tag (or `"default"`) to dock display name, in document order.
    #[serde(rename = "DockName")]
    pub dock_name: IndexMap<String, String>,

    #[serde(rename = "DockIcon")]
    pub dock_icon: String,

    #[serde(rename = "UseScreenMenuBar")]
    pub use_screen_menu_bar: bool,

    #[serde(rename = "LaunchInForeground")]
    pub launch_in_foreground: bool,
}

impl InfoPlist {
    /// Display name used when `DockName` carries no usable `default` entry.
    ///
    /// Prefers `CFBundleDisplayName` over `CFBundleName`.
    pub fn fallback_display_name(&self) -> &str {
        let display = self.bundle_display_name.trim();
        if !display.is_empty() {
            return display;
        }
        self.bundle_name.trim()
    }
}
