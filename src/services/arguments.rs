//! Runtime command-line assembly.
//!
//! [`assemble_arguments`] turns the bundle configuration into the ordered
//! argument vector passed to the runtime. The order is fixed because the
//! runtime parses its options positionally:
//!
//! 1. heap sizing, splash screen, dock and menu-bar options
//! 2. configured `JavaOptions`
//! 3. `--class-path` and `--module-path`
//! 4. the application command (`-jar <path>` or main class plus flags)
//! 5. `ApplicationArguments`
//!
//! Every item whose source value is empty is left out entirely.

use camino::Utf8Path;

use crate::models::{DEFAULT_DOCK_NAME_KEY, InfoPlist, Platform};
use crate::services::paths::resolve_path;

pub const SCREEN_MENU_BAR_OPTION: &str = "-Dapple.laf.useScreenMenuBar=true";

/// Build the runtime argument vector.
///
/// `locale` is only consulted for dock-name selection. Paths are resolved
/// against `root`.
pub fn assemble_arguments(
    info: &InfoPlist,
    root: &Utf8Path,
    platform: Platform,
    locale: Option<&str>,
) -> Vec<String> {
    let config = &info.launcher;
    let mut arguments = Vec::new();

    let heap_minimum = config.heap_minimum.trim();
    if !heap_minimum.is_empty() {
        arguments.push(format!("-Xms{}", heap_minimum));
    }

    let heap_maximum = config.heap_maximum.trim();
    if !heap_maximum.is_empty() {
        arguments.push(format!("-Xmx{}", heap_maximum));
    }

    if let Some(splash) = resolve_path(&config.splash_image, root) {
        arguments.push(format!("-splash:{}", splash));
    }

    if platform.has_dock {
        if let Some(name) = resolve_dock_name(info, locale) {
            arguments.push(format!("-Xdock:name={}", name));
        }

        if let Some(icon) = resolve_path(&config.dock_icon, root) {
            arguments.push(format!("-Xdock:icon={}", icon));
        }
    }

    if config.use_screen_menu_bar {
        arguments.push(SCREEN_MENU_BAR_OPTION.to_string());
    }

    push_trimmed(&mut arguments, &config.java_options);

    if let Some(class_path) = join_path_list(&config.java_class_path, root, platform.path_list_separator) {
        arguments.push("--class-path".to_string());
        arguments.push(class_path);
    }

    if let Some(module_path) = join_path_list(&config.java_module_path, root, platform.path_list_separator) {
        arguments.push("--module-path".to_string());
        arguments.push(module_path);
    }

    arguments.extend(application_command_arguments(&config.application_command, root));

    push_trimmed(&mut arguments, &config.application_arguments);

    arguments
}

/// Join non-empty entries, each resolved against `root`, with `separator`.
///
/// Returns `None` when no entry survives.
pub fn join_path_list(entries: &[String], root: &Utf8Path, separator: char) -> Option<String> {
    let mut joined = String::new();

    for path in entries.iter().filter_map(|entry| resolve_path(entry, root)) {
        if !joined.is_empty() {
            joined.push(separator);
        }
        joined.push_str(path.as_str());
    }

    if joined.is_empty() { None } else { Some(joined) }
}

/// Arguments contributed by `ApplicationCommand`.
///
/// A `.jar` command (any case) becomes `-jar <resolved path>`. Anything else
/// is split on single spaces and passed through verbatim, so a main class and
/// its runtime flags can share one string. There is no quoting: a component
/// containing a literal space cannot be expressed.
pub fn application_command_arguments(command: &str, root: &Utf8Path) -> Vec<String> {
    let command = command.trim();
    if command.is_empty() {
        return Vec::new();
    }

    if command.to_ascii_lowercase().ends_with(".jar") {
        // Non-empty after trimming, so resolution always yields a path.
        return match resolve_path(command, root) {
            Some(jar) => vec!["-jar".to_string(), jar.into_string()],
            None => Vec::new(),
        };
    }

    command.split(' ').map(str::to_string).collect()
}

/// Choose the dock display name for the active locale.
///
/// Precedence of the fallback name: the `"default"` entry, then
/// `CFBundleDisplayName`, then `CFBundleName`. A `"default"`-only mapping
/// short-circuits without looking at the locale. Lookups are
/// case-insensitive; `de-AT` retries as `de` before falling back.
pub fn resolve_dock_name(info: &InfoPlist, locale: Option<&str>) -> Option<String> {
    let names = &info.launcher.dock_name;
    if names.is_empty() {
        return None;
    }

    let mut fallback = "";
    if let Some(default_name) = names.get(DEFAULT_DOCK_NAME_KEY) {
        fallback = default_name.trim();
        if names.len() == 1 {
            return non_empty(fallback);
        }
    }

    if fallback.is_empty() {
        fallback = info.fallback_display_name();
    }

    let locale = locale.map(str::trim).unwrap_or_default().to_lowercase();
    if locale.is_empty() {
        return non_empty(fallback);
    }

    if let Some(name) = lookup_dock_name(info, &locale) {
        return non_empty(name);
    }

    if let Some((language, _)) = locale.split_once('-') {
        if let Some(name) = lookup_dock_name(info, language.trim()) {
            return non_empty(name);
        }
    }

    non_empty(fallback)
}

/// Whether dock-name selection can depend on the locale.
///
/// False for an empty mapping and for one holding only the `"default"` entry.
pub fn dock_name_needs_locale(info: &InfoPlist) -> bool {
    let names = &info.launcher.dock_name;
    match names.len() {
        0 => false,
        1 => !names.contains_key(DEFAULT_DOCK_NAME_KEY),
        _ => true,
    }
}

fn lookup_dock_name<'a>(info: &'a InfoPlist, tag: &str) -> Option<&'a str> {
    info.launcher
        .dock_name
        .iter()
        .find(|(key, _)| key.trim().to_lowercase() == tag)
        .map(|(_, name)| name.trim())
}

fn push_trimmed(arguments: &mut Vec<String>, values: &[String]) {
    arguments.extend(
        values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    );
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
