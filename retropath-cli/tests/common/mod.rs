//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and data root
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the test runner.
const INHERITED_VARS: &[&str] = &[
    "RETROPATH_CONFIG",
    "RETROPATH_LOG_MODE",
    "RETROPATH_AUTOCONFIG_DIR",
    "RETROPATH_ASSETS_DIR",
    "RETROPATH_MENU_CONFIG_DIR",
    "RETROPATH_JOYPAD_DRIVER",
    "RETROPATH_MENU_WALLPAPER",
    "RETROPATH_XMB_FONT",
    "RETROPATH_THEME",
];

/// Settings with every menu field filled, anchored at the home token.
#[allow(dead_code)]
pub const HOME_SETTINGS: &str = "\
directory:
  autoconfig: '~/autoconfig'
  assets: '~/assets'
input:
  joypad_driver: udev
menu:
  theme: flatui
";

/// Test environment with an isolated home directory.
///
/// This struct provides:
/// - A temporary directory used as `HOME`
/// - A separate `XDG_CONFIG_HOME` (created) under it
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path used as `HOME`
    pub home: PathBuf,
    /// Path used as `XDG_CONFIG_HOME`
    pub xdg_config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        let xdg_config = home.join(".xdg");
        std::fs::create_dir_all(&xdg_config).expect("Failed to create XDG dir");

        Self {
            temp_dir,
            home,
            xdg_config,
        }
    }

    /// Get a command builder with `HOME` and the data roots pointed into
    /// this environment and every `RETROPATH_*` variable cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("retropath").expect("Failed to find retropath binary");
        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", &self.xdg_config)
            .env("APPDATA", &self.xdg_config);
        cmd
    }

    /// Get a command builder with `--config` pointed at `path`.
    pub fn command_with_config(&self, path: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("--config").arg(path);
        cmd
    }

    /// The home directory as a string.
    pub fn home_str(&self) -> &str {
        self.home.to_str().expect("temp dir is not UTF-8")
    }

    /// Write `content` to `name` under the home directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `content` as the settings file discovery looks for.
    pub fn write_discovered_settings(&self, content: &str) -> PathBuf {
        let dir = self.xdg_config.join("retroarch");
        std::fs::create_dir_all(&dir).expect("Failed to create data root");
        let path = dir.join("retroarch.yaml");
        std::fs::write(&path, content).expect("Failed to write settings");
        path
    }

    /// Run with `args` and return trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "retropath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

/// Directory holding the built binary, symlinks resolved.
#[allow(dead_code)]
pub fn binary_dir() -> String {
    let bin = assert_cmd::cargo::cargo_bin("retropath");
    let bin = std::fs::canonicalize(bin).expect("binary not built");
    bin.parent()
        .and_then(Path::to_str)
        .expect("binary dir is not UTF-8")
        .to_string()
}
