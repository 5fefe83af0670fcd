//! User locale discovery.
//!
//! The active locale is taken from the first [`LocaleProvider`] in the chain
//! that yields a value. Which providers are available depends on the host:
//! macOS adds the preferred-language setting and the AppleScript locale query
//! behind the `LANG` lookup that every platform has.

use crate::host::{HostEnvironment, PREFERRED_LANGUAGES_UTILITY, USER_LOCALE_UTILITY};
use crate::models::Platform;

/// Environment variable consulted first for the user locale.
pub const LOCALE_VAR: &str = "LANG";

/// Normalize a POSIX-style locale to `language[-REGION]`.
///
/// Drops the encoding suffix, turns `_` into `-`, and keeps at most the first
/// two hyphen-separated segments: `de_DE.UTF-8` becomes `de-DE`.
pub fn normalize_locale(raw: &str) -> String {
    let raw = raw.trim();
    let without_encoding = raw.split('.').next().unwrap_or_default();
    let tag = without_encoding.replace('_', "-");

    let mut segments = tag.split('-');
    match (segments.next(), segments.next()) {
        (Some(language), Some(region)) => format!("{}-{}", language, region),
        _ => tag,
    }
}

/// One strategy for finding the user locale.
pub trait LocaleProvider {
    /// Short name for log output.
    fn name(&self) -> &'static str;

    /// The locale this strategy finds, or `None`.
    fn locale(&self, host: &dyn HostEnvironment) -> Option<String>;
}

/// Reads [`LOCALE_VAR`] and normalizes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentLocale;

impl LocaleProvider for EnvironmentLocale {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn locale(&self, host: &dyn HostEnvironment) -> Option<String> {
        let value = host.var(LOCALE_VAR)?;
        non_empty(normalize_locale(&value))
    }
}

/// First entry of the user's preferred languages (`AppleLanguages`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferredLanguageLocale;

impl LocaleProvider for PreferredLanguageLocale {
    fn name(&self) -> &'static str {
        "preferred-language"
    }

    fn locale(&self, host: &dyn HostEnvironment) -> Option<String> {
        let output = host.command_output(&PREFERRED_LANGUAGES_UTILITY)?;
        first_preferred_language(&output)
    }
}

/// Locale reported by `osascript` (`user locale of (get system info)`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUtilityLocale;

impl LocaleProvider for SystemUtilityLocale {
    fn name(&self) -> &'static str {
        "system-utility"
    }

    fn locale(&self, host: &dyn HostEnvironment) -> Option<String> {
        let output = host.command_output(&USER_LOCALE_UTILITY)?;
        non_empty(normalize_locale(&output))
    }
}

/// Never finds a locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocale;

impl LocaleProvider for NoLocale {
    fn name(&self) -> &'static str {
        "none"
    }

    fn locale(&self, _host: &dyn HostEnvironment) -> Option<String> {
        None
    }
}

/// Ordered chain of locale strategies.
pub struct LocaleResolver {
    providers: Vec<Box<dyn LocaleProvider>>,
}

impl LocaleResolver {
    pub fn new(providers: Vec<Box<dyn LocaleProvider>>) -> Self {
        Self { providers }
    }

    /// The strategies available on `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        if platform.has_dock {
            Self::new(vec![
                Box::new(EnvironmentLocale),
                Box::new(PreferredLanguageLocale),
                Box::new(SystemUtilityLocale),
            ])
        } else {
            Self::new(vec![Box::new(EnvironmentLocale)])
        }
    }

    /// First non-empty locale in chain order.
    pub fn resolve(&self, host: &dyn HostEnvironment) -> Option<String> {
        for provider in &self.providers {
            if let Some(locale) = provider.locale(host) {
                tracing::debug!("User locale from {}: {}", provider.name(), locale);
                return Some(locale);
            }
        }

        tracing::debug!("No user locale found");
        None
    }
}

/// Extract the first element from `defaults read -g AppleLanguages` output:
///
/// ```text
/// (
///     "de-DE",
///     en
/// )
/// ```
fn first_preferred_language(output: &str) -> Option<String> {
    output
        .lines()
        .map(|line| line.trim().trim_end_matches(',').trim_matches('"').trim())
        .find(|line| !line.is_empty() && *line != "(" && *line != ")")
        .map(str::to_string)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCommand, MockHostEnvironment};
    use mockall::predicate::eq;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("de_DE.UTF8"), "de-DE");
        assert_eq!(normalize_locale("de_DE.UTF-8"), "de-DE");
        assert_eq!(normalize_locale("fr"), "fr");
        assert_eq!(normalize_locale(""), "");
        assert_eq!(normalize_locale("zh_Hant_TW"), "zh-Hant");
        assert_eq!(normalize_locale(" en_US \n"), "en-US");
        assert_eq!(normalize_locale("C.UTF-8"), "C");
    }

    #[test]
    fn test_environment_locale() {
        let mut host = MockHostEnvironment::new();
        host.expect_var()
            .with(eq(LOCALE_VAR))
            .return_const(Some("pt_BR.ISO8859-1".to_string()));

        assert_eq!(EnvironmentLocale.locale(&host), Some("pt-BR".to_string()));
    }

    #[test]
    fn test_environment_locale_blank_is_none() {
        let mut host = MockHostEnvironment::new();
        host.expect_var().return_const(Some("  ".to_string()));

        assert_eq!(EnvironmentLocale.locale(&host), None);
    }

    #[test]
    fn test_first_preferred_language() {
        let output = "(\n    \"de-DE\",\n    en\n)\n";
        assert_eq!(first_preferred_language(output), Some("de-DE".to_string()));
        assert_eq!(first_preferred_language("(\n)\n"), None);
        assert_eq!(first_preferred_language(""), None);
    }

    #[test]
    fn test_chain_stops_at_first_result() {
        let mut host = MockHostEnvironment::new();
        host.expect_var().return_const(None::<String>);
        host.expect_command_output()
            .withf(|command: &HostCommand| *command == PREFERRED_LANGUAGES_UTILITY)
            .times(1)
            .return_const(Some("(\n    \"fr-CA\"\n)".to_string()));
        host.expect_command_output()
            .withf(|command: &HostCommand| *command == USER_LOCALE_UTILITY)
            .never();

        let resolver = LocaleResolver::for_platform(Platform::macos());
        assert_eq!(resolver.resolve(&host), Some("fr-CA".to_string()));
    }

    #[test]
    fn test_chain_falls_through_to_system_utility() {
        let mut host = MockHostEnvironment::new();
        host.expect_var().return_const(None::<String>);
        host.expect_command_output()
            .withf(|command: &HostCommand| *command == PREFERRED_LANGUAGES_UTILITY)
            .return_const(None::<String>);
        host.expect_command_output()
            .withf(|command: &HostCommand| *command == USER_LOCALE_UTILITY)
            .return_const(Some("de_AT\n".to_string()));

        let resolver = LocaleResolver::for_platform(Platform::macos());
        assert_eq!(resolver.resolve(&host), Some("de-AT".to_string()));
    }

    #[test]
    fn test_generic_platform_only_reads_environment() {
        let mut host = MockHostEnvironment::new();
        host.expect_var().return_const(None::<String>);
        host.expect_command_output().never();

        let resolver = LocaleResolver::for_platform(Platform::generic());
        assert_eq!(resolver.resolve(&host), None);
    }

    #[test]
    fn test_no_locale_provider() {
        let host = MockHostEnvironment::new();
        let resolver = LocaleResolver::new(vec![Box::new(NoLocale)]);
        assert_eq!(resolver.resolve(&host), None);
    }

    proptest! {
        #[test]
        fn prop_normalize_locale_idempotent(raw in "[a-zA-Z]{0,3}([_-][a-zA-Z]{0,3}){0,3}(\\.[A-Za-z0-9-]{0,6})?") {
            let once = normalize_locale(&raw);
            prop_assert_eq!(normalize_locale(&once), once.clone());
        }
    }
}
