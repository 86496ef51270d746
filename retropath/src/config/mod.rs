//! Settings for special directory resolution.
//!
//! This module provides the settings snapshot the resolver reads, with
//! support for:
//! - YAML settings files (discovered in the application data root)
//! - Environment variable overrides
//! - Programmatic settings via builder pattern
//! - Validation
//!
//! # Settings Precedence
//!
//! Settings are merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_settings`)
//! 2. Environment variables (`RETROPATH_*`)
//! 3. Settings file (`--config`, or `retroarch.yaml` in the data root)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use retropath::config::{ConfigBuilder, ConfigProvider, Settings};
//!
//! let mut custom = Settings::default();
//! custom.directory.assets = Some("/usr/share/retroarch/assets".to_string());
//!
//! let settings = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_settings(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.assets_directory(), "/usr/share/retroarch/assets");
//! assert_eq!(settings.theme(), "monochrome");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod provider;
pub mod schema;
pub mod validator;

#[cfg(all(test, unix))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use merger::ConfigMerger;
#[cfg(test)]
pub use provider::MockConfigProvider;
pub use provider::ConfigProvider;
pub use schema::{
    DirectorySettings, InputSettings, MenuSettings, PathSettings, Settings, DEFAULT_THEME,
};
pub use validator::ConfigValidator;
