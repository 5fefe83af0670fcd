/// Host traits that influence how the command line is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// The host has a native dock (`-Xdock:*` options and locale lookups apply).
    pub has_dock: bool,

    /// `/usr/libexec/java_home` can be asked for the runtime home.
    pub has_java_home_utility: bool,

    /// Separator for `--class-path` / `--module-path` lists.
    pub path_list_separator: char,
}

impl Platform {
    pub const fn macos() -> Self {
        Self {
            has_dock: true,
            has_java_home_utility: true,
            path_list_separator: ':',
        }
    }

    pub const fn generic() -> Self {
        Self {
            has_dock: false,
            has_java_home_utility: false,
            path_list_separator: if cfg!(windows) { ';' } else { ':' },
        }
    }

    /// The platform the launcher was compiled for.
    pub const fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::macos()
        } else {
            Self::generic()
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}
