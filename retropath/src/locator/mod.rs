//! Discovery of the running application's own location.
//!
//! Operating systems expose "where is this program" through different
//! mechanisms. Each mechanism is a strategy implementing
//! [`ApplicationPathLocator`]; [`LocatorChain::platform`] assembles the
//! strategies that make sense for the build target in the order they should
//! be tried.
//!
//! Failing to locate the application is not an error. Callers treat an
//! unknown location as "the `:` notation is unavailable".

#[cfg(target_os = "macos")]
mod bundle;
mod image;
mod native;
mod proc;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::buffer::PathBuffer;
use crate::error::{Error, Result};
use crate::path::parent_dir;

#[cfg(target_os = "macos")]
pub use bundle::{BundleLocator, BUNDLE_MARKER};
pub use image::{primary_image, ImageMapLocator};
pub use native::CurrentExeLocator;
pub use proc::{ProcLocator, PROC_CANDIDATES};

/// A strategy for finding the path of the running application.
pub trait ApplicationPathLocator {
    /// Short strategy name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempt to determine the application path.
    fn try_locate(&self) -> Option<PathBuf>;

    /// Write the application path into `out`.
    ///
    /// Returns `Ok(false)` and leaves `out` empty when the path could not be
    /// determined; a warning is logged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`](crate::Error::BufferTooSmall) if the
    /// located path does not fit `out`.
    fn locate(&self, out: &mut PathBuffer) -> Result<bool> {
        out.clear();
        match self.try_locate().as_deref().and_then(Path::to_str) {
            Some(path) => {
                out.set(path)?;
                Ok(true)
            }
            None => {
                log::warn!("Cannot resolve application path ({})", self.name());
                Ok(false)
            }
        }
    }
}

/// Directory containing the located application, without a trailing
/// separator.
///
/// Returns `None` if the locator finds nothing or the path is not valid UTF-8.
#[must_use]
pub fn application_base_dir(locator: &dyn ApplicationPathLocator) -> Option<String> {
    let located = locator.try_locate()?;
    let located = located.to_str()?;
    parent_dir(located).map(str::to_owned)
}

/// Like [`ApplicationPathLocator::locate`], failing when nothing is found.
///
/// # Errors
///
/// Returns [`Error::PathNotResolved`] if the path could not be determined,
/// or [`Error::BufferTooSmall`] if it does not fit `out`.
pub fn require_application_path(
    locator: &dyn ApplicationPathLocator,
    out: &mut PathBuffer,
) -> Result<()> {
    if locator.locate(out)? {
        Ok(())
    } else {
        Err(Error::PathNotResolved {
            what: "application path".into(),
        })
    }
}

/// An ordered list of strategies; the first to produce a path wins.
pub struct LocatorChain {
    strategies: Vec<Box<dyn ApplicationPathLocator + Send + Sync>>,
}

impl LocatorChain {
    /// An empty chain. It never locates anything until strategies are added.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy.
    #[must_use]
    pub fn with(mut self, strategy: impl ApplicationPathLocator + Send + Sync + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// The default chain for the build target.
    ///
    /// - macOS: main bundle, then the executable path
    /// - Windows: the module file name
    /// - Linux and Android: the executable path, loaded image map, `/proc`
    /// - other Unix systems: the executable path, then `/proc`
    #[must_use]
    pub fn platform() -> Self {
        let chain = Self::new();

        #[cfg(target_os = "macos")]
        let chain = chain.with(BundleLocator).with(CurrentExeLocator);

        #[cfg(windows)]
        let chain = chain.with(CurrentExeLocator);

        #[cfg(any(target_os = "linux", target_os = "android"))]
        let chain = chain
            .with(CurrentExeLocator)
            .with(ImageMapLocator::new())
            .with(ProcLocator::new());

        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "linux", target_os = "android"))
        ))]
        let chain = chain.with(CurrentExeLocator).with(ProcLocator::new());

        #[cfg(not(any(unix, windows)))]
        let chain = chain.with(CurrentExeLocator);

        chain
    }

    /// Names of the strategies, in the order they are tried.
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Number of strategies in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the chain has no strategies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for LocatorChain {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Debug for LocatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatorChain")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

impl ApplicationPathLocator for LocatorChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        for strategy in &self.strategies {
            if let Some(path) = strategy.try_locate() {
                log::debug!(
                    "Application path {} found by {}",
                    path.display(),
                    strategy.name()
                );
                return Some(path);
            }
            log::debug!("Locator {} found nothing", strategy.name());
        }
        log::warn!(
            "Cannot resolve application path (tried {})",
            self.strategy_names().join(", ")
        );
        None
    }

    // `try_locate` already warns when every strategy falls through.
    fn locate(&self, out: &mut PathBuffer) -> Result<bool> {
        out.clear();
        match self.try_locate().as_deref().and_then(Path::to_str) {
            Some(path) => {
                out.set(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A locator returning a preset answer.
///
/// # Examples
///
/// ```
/// use retropath::locator::{application_base_dir, FixedLocator};
///
/// let locator = FixedLocator::new("/opt/retroarch/retroarch");
/// assert_eq!(application_base_dir(&locator).as_deref(), Some("/opt/retroarch"));
///
/// assert!(application_base_dir(&FixedLocator::unknown()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocator {
    path: Option<PathBuf>,
}

impl FixedLocator {
    /// A locator that always reports `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A locator that never finds anything.
    #[must_use]
    pub const fn unknown() -> Self {
        Self { path: None }
    }
}

impl ApplicationPathLocator for FixedLocator {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
