//! Build mode: production vs development.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Environment variable consulted when `[build] env` is not set.
pub const DEFAULT_ENV_VAR: &str = "SITE_ENV";

/// Build mode, resolved once at start-up and passed down explicitly.
///
/// - `Production`: assets are versioned by content hash.
/// - `Development`: assets are versioned by a build timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    /// Interpret a raw environment value.
    ///
    /// Only `production` (surrounding whitespace ignored) selects production.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Read the mode from the process environment.
    pub fn from_env(var: &str) -> Self {
        Self::from_env_value(std::env::var(var).ok().as_deref())
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_value() {
        assert_eq!(
            BuildMode::from_env_value(Some("production")),
            BuildMode::Production
        );
        assert_eq!(
            BuildMode::from_env_value(Some(" production\n")),
            BuildMode::Production
        );
        assert_eq!(
            BuildMode::from_env_value(Some("Production")),
            BuildMode::Development
        );
        assert_eq!(
            BuildMode::from_env_value(Some("staging")),
            BuildMode::Development
        );
        assert_eq!(BuildMode::from_env_value(None), BuildMode::Development);
    }

    #[test]
    fn test_from_env_unset_variable() {
        let mode = BuildMode::from_env("SITEKIT_TEST_SURELY_UNSET_VARIABLE");
        assert_eq!(mode, BuildMode::Development);
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildMode::Production.to_string(), "production");
        assert!(BuildMode::Production.is_production());
        assert!(!BuildMode::default().is_production());
    }
}
