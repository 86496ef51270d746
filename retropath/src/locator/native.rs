//! Executable path reported by the operating system.

use std::env;
use std::path::PathBuf;

use super::ApplicationPathLocator;

/// Asks the OS for the running executable's own file path.
///
/// This wraps `GetModuleFileNameW` on Windows, `_NSGetExecutablePath` on
/// macOS, `/proc/self/exe` on Linux and `sysctl` on the BSDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExeLocator;

impl ApplicationPathLocator for CurrentExeLocator {
    fn name(&self) -> &'static str {
        "current-exe"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        match env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("current_exe failed: {e}");
                None
            }
        }
    }
}
