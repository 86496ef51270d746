//! Settings validation.
//!
//! Checks that configured values are usable as path components and
//! directories before they reach the resolver.

use std::path::Path;

use crate::config::schema::Settings;
use crate::error::{Error, Result};
use crate::path::{ends_with_separator, starts_with_separator, PortablePathCodec};

/// Validates settings.
///
/// # Examples
///
/// ```
/// use retropath::config::{ConfigValidator, Settings};
///
/// let mut settings = Settings::default();
/// ConfigValidator::validate(&settings).unwrap();
///
/// settings.menu.theme = Some("../escape".to_string());
/// assert!(ConfigValidator::validate(&settings).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate complete settings.
    ///
    /// Empty and absent values are always valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(settings: &Settings) -> Result<()> {
        for (field, value) in settings.path_fields() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                Self::validate_path(field, value)?;
            }
        }

        for (field, value) in [
            ("directory.autoconfig", &settings.directory.autoconfig),
            ("directory.assets", &settings.directory.assets),
            ("directory.menu_config", &settings.directory.menu_config),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                Self::validate_directory(field, value)?;
            }
        }

        if let Some(config) = settings.path.config.as_deref() {
            if ends_with_separator(config) {
                return Err(Error::Validation {
                    field: "path.config".into(),
                    message: "Must name a file, not a directory".into(),
                });
            }
        }

        for (field, value) in [
            ("menu.theme", &settings.menu.theme),
            ("input.joypad_driver", &settings.input.joypad_driver),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                Self::validate_component(field, value)?;
            }
        }

        Ok(())
    }

    fn validate_path(field: &str, value: &str) -> Result<()> {
        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }
        Ok(())
    }

    /// Directories must be absolute or carry a `~`/`:` token.
    fn validate_directory(field: &str, value: &str) -> Result<()> {
        let anchored = PortablePathCodec::is_portable(value)
            || starts_with_separator(value)
            || Path::new(value).is_absolute();
        if !anchored {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' must be absolute or start with '~' or ':'"),
            });
        }
        Ok(())
    }

    /// Identifiers joined into paths as a single component.
    fn validate_component(field: &str, value: &str) -> Result<()> {
        if value == "." || value == ".." {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' is not a valid identifier"),
            });
        }
        if value.contains(['/', '\\', '\0']) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain path separators or null bytes".into(),
            });
        }
        Ok(())
    }
}
