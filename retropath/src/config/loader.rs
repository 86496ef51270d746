//! Settings file discovery and loading.
//!
//! Settings files are YAML documents. The default file lives in the
//! application data root as `retroarch.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::data::ApplicationDataLocator;
use crate::error::{Error, Result};

/// Name of the settings file inside the application data root.
pub const DEFAULT_CONFIG_FILE: &str = "retroarch.yaml";

/// Loads settings from YAML files.
///
/// # Examples
///
/// ```no_run
/// use retropath::config::ConfigLoader;
/// use std::path::Path;
///
/// let settings = ConfigLoader::load_file(Path::new("retroarch.yaml")).unwrap();
/// println!("assets: {:?}", settings.directory.assets);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML settings file.
    ///
    /// The file's own path is recorded as `path.config` unless the document
    /// names another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        let mut settings = Self::load_str(&contents)?;
        if settings.path.config.as_deref().map_or(true, str::is_empty) {
            settings.path.config = Some(path.to_string_lossy().into_owned());
        }
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse a YAML settings document.
    ///
    /// An empty document yields default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or names an
    /// unknown field.
    pub fn load_str(contents: &str) -> Result<Settings> {
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Default settings file location within the application data root.
    ///
    /// Returns `None` if the data root cannot be determined.
    #[must_use]
    pub fn default_path(data: &ApplicationDataLocator<'_>) -> Option<PathBuf> {
        data.try_locate()
            .map(|root| PathBuf::from(root).join(DEFAULT_CONFIG_FILE))
    }

    /// Load the default settings file, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(data: &ApplicationDataLocator<'_>) -> Result<Option<Settings>> {
        let Some(path) = Self::default_path(data) else {
            return Ok(None);
        };
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }
}
