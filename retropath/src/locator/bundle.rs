//! Main bundle location on macOS.

use std::path::PathBuf;

use core_foundation::bundle::CFBundle;

use super::ApplicationPathLocator;

/// Synthetic file name appended to a bundle path.
///
/// A bundle has no literal binary at its root. Appending a marker makes the
/// located path "a file inside the bundle", so its containing directory is
/// the bundle itself.
pub const BUNDLE_MARKER: &str = "nobin";

/// Reports the main bundle's path via CoreFoundation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleLocator;

impl ApplicationPathLocator for BundleLocator {
    fn name(&self) -> &'static str {
        "bundle"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        let bundle = CFBundle::main_bundle();
        let url = bundle.bundle_url()?;
        let path = url.to_path()?;
        Some(path.join(BUNDLE_MARKER))
    }
}
