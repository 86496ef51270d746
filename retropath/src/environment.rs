//! Access to environment signals.
//!
//! The locators and the configuration layer read environment variables and
//! the user's home directory through the [`Environment`] trait so callers can
//! substitute a fixed set of values.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Source of environment variables and the home directory.
pub trait Environment {
    /// Value of the environment variable `key`, if set and valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// The user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Like [`Environment::var`], treating an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// The home directory as a string, treating an empty value as unknown.
    fn home(&self) -> Option<String> {
        self.home_dir()
            .and_then(|p| p.to_str().map(str::to_owned))
            .filter(|h| !h.is_empty())
    }
}

/// The environment of the running process.
///
/// The home directory comes from the `home` crate, which honours `HOME` on
/// Unix and `USERPROFILE` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// A fixed environment, independent of the running process.
///
/// # Examples
///
/// ```
/// use retropath::environment::{Environment, FixedEnvironment};
///
/// let env = FixedEnvironment::new()
///     .with_home("/home/alice")
///     .with_var("XDG_CONFIG_HOME", "/home/alice/.config");
///
/// assert_eq!(env.home().as_deref(), Some("/home/alice"));
/// assert_eq!(env.var("XDG_CONFIG_HOME").as_deref(), Some("/home/alice/.config"));
/// assert!(env.var("APPDATA").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl FixedEnvironment {
    /// Create an empty environment: no variables, unknown home.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Set a variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_environment_empty() {
        let env = FixedEnvironment::new();
        assert!(env.var("HOME").is_none());
        assert!(env.home().is_none());
    }

    #[test]
    fn test_non_empty_var_filters_empty() {
        let env = FixedEnvironment::new().with_var("APPDATA", "");
        assert_eq!(env.var("APPDATA").as_deref(), Some(""));
        assert!(env.non_empty_var("APPDATA").is_none());
    }

    #[test]
    fn test_empty_home_is_unknown() {
        let env = FixedEnvironment::new().with_home("");
        assert!(env.home().is_none());
    }

    #[test]
    fn test_process_environment_reads_path() {
        // PATH is set in every reasonable test environment.
        assert!(ProcessEnvironment.var("PATH").is_some());
    }
}
