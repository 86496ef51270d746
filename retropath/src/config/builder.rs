//! Builder composing settings from every source.

use std::path::PathBuf;

use crate::buffer::PATH_MAX_LENGTH;
use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Settings;
use crate::config::validator::ConfigValidator;
use crate::data::ApplicationDataLocator;
use crate::environment::{Environment, ProcessEnvironment};
use crate::error::Result;
use crate::path::PortablePathCodec;

/// Builds a validated settings snapshot.
///
/// Sources are applied in order: settings file, `RETROPATH_*` environment
/// variables, then programmatic overrides.
///
/// # Examples
///
/// ```
/// use retropath::config::{ConfigBuilder, Settings};
///
/// let mut custom = Settings::default();
/// custom.menu.theme = Some("flatui".to_string());
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_settings(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.menu.theme.as_deref(), Some("flatui"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Settings>,
    codec: Option<PortablePathCodec>,
    capacity: usize,
    validate: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// A builder that discovers the settings file in the data root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            file: None,
            skip_files: false,
            skip_env: false,
            overrides: None,
            codec: None,
            capacity: PATH_MAX_LENGTH,
            validate: true,
        }
    }

    /// Load this settings file instead of discovering one.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Load no settings file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `RETROPATH_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply these settings last.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.overrides = Some(settings);
        self
    }

    /// Expand portable tokens in path fields with `codec`.
    #[must_use]
    pub fn expand_with(mut self, codec: PortablePathCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Capacity used when expanding path fields.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Skip validation of the merged settings.
    #[must_use]
    pub const fn skip_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Build against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be loaded, the merged
    /// settings are invalid, or an expanded path overflows.
    pub fn build(self) -> Result<Settings> {
        self.build_with(&ProcessEnvironment)
    }

    /// Build against `env`.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigBuilder::build`].
    pub fn build_with(self, env: &dyn Environment) -> Result<Settings> {
        let mut settings = match (&self.file, self.skip_files) {
            (Some(path), _) => ConfigLoader::load_file(path)?,
            (None, false) => {
                ConfigLoader::discover(&ApplicationDataLocator::new(env))?.unwrap_or_default()
            }
            (None, true) => Settings::default(),
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut settings, env);
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut settings, overrides);
        }

        if self.validate {
            ConfigValidator::validate(&settings)?;
        }

        match &self.codec {
            Some(codec) => settings.expand_portable(codec, self.capacity),
            None => Ok(settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{ASSETS_DIR_VAR, THEME_VAR};
    use crate::environment::FixedEnvironment;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_build() {
        let settings = ConfigBuilder::new()
            .skip_files()
            .build_with(&FixedEnvironment::new())
            .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("retroarch.yaml");
        fs::write(&path, "menu:\n  theme: flatui\n").unwrap();
        let env = FixedEnvironment::new().with_var(THEME_VAR, "systematic");

        let settings = ConfigBuilder::new().with_file(&path).build_with(&env).unwrap();
        assert_eq!(settings.menu.theme.as_deref(), Some("systematic"));
    }

    #[test]
    fn test_programmatic_overrides_env() {
        let env = FixedEnvironment::new().with_var(THEME_VAR, "systematic");
        let mut custom = Settings::default();
        custom.menu.theme = Some("dot-art".into());

        let settings = ConfigBuilder::new()
            .skip_files()
            .with_settings(custom)
            .build_with(&env)
            .unwrap();
        assert_eq!(settings.menu.theme.as_deref(), Some("dot-art"));
    }

    #[test]
    fn test_skip_env() {
        let env = FixedEnvironment::new().with_var(THEME_VAR, "systematic");
        let settings = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .build_with(&env)
            .unwrap();
        assert!(settings.menu.theme.is_none());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let env = FixedEnvironment::new().with_var(ASSETS_DIR_VAR, "relative/assets");
        let err = ConfigBuilder::new()
            .skip_files()
            .build_with(&env)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        ConfigBuilder::new()
            .skip_files()
            .skip_validation()
            .build_with(&env)
            .unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn test_expand_with_codec() {
        let env = FixedEnvironment::new().with_var(ASSETS_DIR_VAR, ":/assets");
        let codec = PortablePathCodec::new(None, Some("/opt/retroarch".into()));
        let settings = ConfigBuilder::new()
            .skip_files()
            .expand_with(codec)
            .build_with(&env)
            .unwrap();
        assert_eq!(settings.directory.assets.as_deref(), Some("/opt/retroarch/assets"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_discovers_file_in_data_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("retroarch");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("retroarch.yaml"), "input:\n  joypad_driver: hid\n").unwrap();
        let env = FixedEnvironment::new().with_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());

        let settings = ConfigBuilder::new().build_with(&env).unwrap();
        assert_eq!(settings.input.joypad_driver.as_deref(), Some("hid"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = ConfigBuilder::new()
            .with_file("/nonexistent/retroarch.yaml")
            .build_with(&FixedEnvironment::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}
