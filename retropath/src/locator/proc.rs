//! Fallback through per-process links under `/proc`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use super::ApplicationPathLocator;

/// Per-process entries naming the process's own binary.
///
/// Not standardized: `exe` is Linux, `file` the BSDs, `path/a.out` Solaris.
pub const PROC_CANDIDATES: [&str; 3] = ["exe", "file", "path/a.out"];

/// Resolves the first `/proc/<pid>/<candidate>` link that exists.
#[derive(Debug, Clone)]
pub struct ProcLocator {
    root: PathBuf,
    pid: u32,
}

impl ProcLocator {
    /// Look under `/proc` for the current process.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("/proc", process::id())
    }

    /// Look under `root` for process `pid`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>, pid: u32) -> Self {
        Self {
            root: root.into(),
            pid,
        }
    }

    /// The link paths tried, in order.
    #[must_use]
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let process_dir = self.root.join(self.pid.to_string());
        PROC_CANDIDATES
            .iter()
            .map(|candidate| process_dir.join(candidate))
            .collect()
    }

    /// The proc filesystem root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProcLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationPathLocator for ProcLocator {
    fn name(&self) -> &'static str {
        "proc"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        self.candidate_paths().into_iter().find_map(|link| {
            fs::read_link(&link)
                .map_err(|e| log::debug!("readlink {} failed: {e}", link.display()))
                .ok()
        })
    }
}
