pub mod settings;

use crate::models::{ApplicationRoot, InfoPlist};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

pub use settings::LauncherSettings;

/// Errors that can occur while loading the bundle's `Info.plist`
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Can't find \"Info.plist\" at: {0}")]
    NotFound(Utf8PathBuf),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: Utf8PathBuf,
        #[source]
        source: plist::Error,
    },
}

/// The bundle's `Info.plist`.
///
/// Accepts both XML and binary property lists. The document is read once;
/// the decoded [`InfoPlist`] is never written back.
#[derive(Debug, Clone)]
pub struct BundleDocument {
    path: Utf8PathBuf,
}

impl BundleDocument {
    /// Document at an explicit location.
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Document at `<bundle>/Contents/Info.plist`.
    pub fn for_root(root: &ApplicationRoot) -> Self {
        Self::new(root.info_plist_path())
    }

    /// Decode the document.
    pub fn load(&self) -> Result<InfoPlist, DocumentError> {
        if !self.path.is_file() {
            return Err(DocumentError::NotFound(self.path.clone()));
        }

        let info: InfoPlist =
            plist::from_file(&self.path).map_err(|source| DocumentError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Info.plist: {}", self.path);
        tracing::debug!(
            "Bundle {} v{} ({})",
            info.bundle_name,
            info.bundle_version,
            info.bundle_display_name
        );
        Ok(info)
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>Demo</string>
    <key>CFBundleIdentifier</key>
    <string>org.example.demo</string>
    <key>JavaMacLauncher</key>
    <dict>
        <key>HeapMaximum</key>
        <string>512m</string>
        <key>UseScreenMenuBar</key>
        <true/>
        <key>DockName</key>
        <dict>
            <key>de</key>
            <string>Vorführung</string>
            <key>default</key>
            <string>Demo</string>
        </dict>
    </dict>
</dict>
</plist>
"#;

    fn create_test_document(contents: &str) -> (BundleDocument, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let path = dir.join("Info.plist");
        fs::write(&path, contents).unwrap();
        (BundleDocument::new(path), temp_dir)
    }

    #[test]
    fn test_load_minimal_document() {
        let (document, _temp_dir) = create_test_document(MINIMAL_PLIST);
        let info = document.load().unwrap();

        assert_eq!(info.bundle_name, "Demo");
        assert_eq!(info.launcher.heap_maximum, "512m");
        assert!(info.launcher.use_screen_menu_bar);
        assert!(!info.launcher.launch_in_foreground);
        assert!(info.launcher.java_options.is_empty());

        let keys: Vec<&str> = info.launcher.dock_name.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["de", "default"]);
    }

    #[test]
    fn test_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();

        let document = BundleDocument::new(dir.join("Info.plist"));
        assert!(matches!(document.load(), Err(DocumentError::NotFound(_))));
    }

    #[test]
    fn test_malformed_document() {
        let (document, _temp_dir) = create_test_document("<plist><dict><key>broken");
        assert!(matches!(document.load(), Err(DocumentError::Decode { .. })));
    }
}
