//! Common test utilities for integration tests.
//!
//! Fixtures model a user `alice` with an install nested in her home
//! directory, the layout where `~` and `:` abbreviations compete.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use retropath::config::Settings;
use retropath::{FixedEnvironment, PortablePathCodec};

#[allow(dead_code)]
pub const HOME: &str = "/home/alice";
#[allow(dead_code)]
pub const APP_BASE: &str = "/home/alice/retroarch";

/// Codec anchored at [`HOME`] and [`APP_BASE`].
#[allow(dead_code)]
pub fn alice_codec() -> PortablePathCodec {
    PortablePathCodec::new(Some(HOME.to_string()), Some(APP_BASE.to_string()))
}

/// Environment with only `HOME` set.
#[allow(dead_code)]
pub fn alice_env() -> FixedEnvironment {
    FixedEnvironment::new().with_home(HOME)
}

/// Settings as a portable install would write them.
#[allow(dead_code)]
pub fn portable_settings() -> Settings {
    let mut settings = Settings::default();
    settings.directory.assets = Some(":/assets".into());
    settings.directory.autoconfig = Some(":/autoconfig".into());
    settings.input.joypad_driver = Some("udev".into());
    settings.menu.theme = Some("flatui".into());
    settings.path.config = Some("~/.config/retroarch/retroarch.yaml".into());
    settings
}

/// Write `content` to `dir/filename`.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
