//! Path normalization against the application bundle.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolve a configured path against `root`.
///
/// The value is trimmed first. Empty input yields `None`; absolute input is
/// only cleaned; anything else is joined onto `root` and cleaned.
pub fn resolve_path(path: &str, root: &Utf8Path) -> Option<Utf8PathBuf> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }

    let path = Utf8Path::new(path);
    if path.has_root() {
        Some(clean(path))
    } else {
        Some(clean(&root.join(path)))
    }
}

/// Lexically normalize a path.
///
/// Repeated separators and `.` components are dropped and `..` consumes the
/// preceding normal component. `..` directly under the root is discarded; a
/// relative path keeps its leading `..` components. An empty result is `.`.
/// The filesystem is never consulted, so symlinks are not followed.
pub fn clean(path: &Utf8Path) -> Utf8PathBuf {
    let mut cleaned = Utf8PathBuf::new();
    let mut parts: Vec<&str> = Vec::new();
    let mut rooted = false;

    for component in path.components() {
        match component {
            Utf8Component::Prefix(prefix) => cleaned.push(prefix.as_str()),
            Utf8Component::RootDir => {
                cleaned.push(component.as_str());
                rooted = true;
            }
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            Utf8Component::Normal(name) => parts.push(name),
        }
    }

    for part in parts {
        cleaned.push(part);
    }

    if cleaned.as_str().is_empty() {
        Utf8PathBuf::from(".")
    } else {
        cleaned
    }
}
