//! Special directory resolution.

use std::fmt;

use crate::buffer::PathBuffer;
use crate::config::ConfigProvider;
use crate::data::ApplicationDataLocator;
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::path::{basedir, join, with_trailing_separator};
use crate::special::kind::{DirectoryKind, SkinSet};
use crate::special::rule::{BaseDir, OverrideField, Rule, Segment, MAX_RULE_DEPTH};

/// Resolves directory kinds against a settings snapshot.
///
/// Resolution never fails except on buffer overflow: kinds with missing
/// settings, disabled skins or no support resolve to an empty path.
///
/// # Examples
///
/// ```
/// use retropath::config::Settings;
/// use retropath::environment::FixedEnvironment;
/// use retropath::special::{DirectoryKind, SpecialDirectoryResolver};
/// use retropath::PathBuffer;
///
/// let mut settings = Settings::default();
/// settings.directory.assets = Some("/usr/share/retroarch/assets".to_string());
/// let env = FixedEnvironment::new();
///
/// let resolver = SpecialDirectoryResolver::new(&settings, &env);
/// let mut buf = PathBuffer::default();
/// resolver.resolve(DirectoryKind::XmbFont, &mut buf).unwrap();
///
/// # #[cfg(all(unix, feature = "xmb"))]
/// assert_eq!(buf.as_str(), "/usr/share/retroarch/assets/xmb/monochrome/font.ttf");
/// ```
#[derive(Clone)]
pub struct SpecialDirectoryResolver<'a> {
    config: &'a dyn ConfigProvider,
    data: ApplicationDataLocator<'a>,
    skins: SkinSet,
}

impl<'a> SpecialDirectoryResolver<'a> {
    /// A resolver over `config`, with the compiled skins enabled.
    #[must_use]
    pub fn new(config: &'a dyn ConfigProvider, env: &'a dyn Environment) -> Self {
        Self {
            config,
            data: ApplicationDataLocator::new(env),
            skins: SkinSet::compiled(),
        }
    }

    /// Enable exactly these skins.
    #[must_use]
    pub const fn with_skins(mut self, skins: SkinSet) -> Self {
        self.skins = skins;
        self
    }

    /// Use another application data locator.
    #[must_use]
    pub fn with_data_locator(mut self, data: ApplicationDataLocator<'a>) -> Self {
        self.data = data;
        self
    }

    /// The enabled skins.
    #[must_use]
    pub const fn skins(&self) -> SkinSet {
        self.skins
    }

    /// Whether `kind` can resolve to a non-empty path.
    #[must_use]
    pub fn is_enabled(&self, kind: DirectoryKind) -> bool {
        kind.skin().map_or(true, |skin| self.skins.contains(skin))
            && kind.rule() != Rule::Unsupported
    }

    /// Write the path for `kind` into `out`.
    ///
    /// `out` is left empty when the kind is disabled or its settings are
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if the path does not fit `out`;
    /// `out` is left empty.
    pub fn resolve(&self, kind: DirectoryKind, out: &mut PathBuffer) -> Result<()> {
        out.clear();
        if !self.is_enabled(kind) {
            log::debug!("{kind} is disabled");
            return Ok(());
        }
        self.resolve_at(kind, 0, out)?;
        log::debug!("Resolved {kind} to '{out}'");
        Ok(())
    }

    /// Like [`SpecialDirectoryResolver::resolve`], failing on an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotResolved`] if `kind` resolves to an empty path,
    /// or [`Error::BufferTooSmall`] if it does not fit `out`.
    pub fn require(&self, kind: DirectoryKind, out: &mut PathBuffer) -> Result<()> {
        self.resolve(kind, out)?;
        if out.is_empty() {
            return Err(Error::PathNotResolved {
                what: kind.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve every kind with buffers of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] for the first kind whose path does
    /// not fit.
    pub fn resolve_all(&self, capacity: usize) -> Result<Vec<(DirectoryKind, String)>> {
        DirectoryKind::ALL
            .into_iter()
            .map(|kind| {
                let mut buf = PathBuffer::new(capacity);
                self.resolve(kind, &mut buf)?;
                Ok((kind, buf.into_string()))
            })
            .collect()
    }

    fn resolve_at(&self, kind: DirectoryKind, depth: usize, out: &mut PathBuffer) -> Result<()> {
        out.clear();
        if depth >= MAX_RULE_DEPTH {
            debug_assert!(depth < MAX_RULE_DEPTH, "rule chain for {kind} too deep");
            log::error!("Rule chain for {kind} exceeds depth {MAX_RULE_DEPTH}");
            return Ok(());
        }

        match kind.rule() {
            Rule::Join { base, segments } => self.join_segments(base, segments, out),
            Rule::Derived {
                override_field,
                parent,
                suffix,
                trailing_separator,
            } => self.derive(
                override_field,
                parent,
                suffix,
                trailing_separator,
                depth,
                out,
            ),
            Rule::ConfigDirectory => self.config_directory(out),
            Rule::ApplicationData => self.data.locate(out).map(drop),
            Rule::Unsupported => Ok(()),
        }
    }

    fn join_segments(
        &self,
        base: BaseDir,
        segments: &[Segment],
        out: &mut PathBuffer,
    ) -> Result<()> {
        let base = base.read(self.config);
        if base.is_empty() {
            return Ok(());
        }
        let path = segments
            .iter()
            .map(|segment| segment.read(self.config))
            .filter(|component| !component.is_empty())
            .fold(base, |path, component| join(&path, &component));
        out.set(&path)
    }

    fn derive(
        &self,
        override_field: Option<OverrideField>,
        parent: DirectoryKind,
        suffix: Option<&str>,
        trailing_separator: bool,
        depth: usize,
        out: &mut PathBuffer,
    ) -> Result<()> {
        let explicit = override_field
            .map(|field| field.read(self.config))
            .filter(|value| !value.is_empty());
        if let Some(value) = explicit {
            return out.set(&value);
        }

        let mut scratch = PathBuffer::new(out.capacity());
        self.resolve_at(parent, depth + 1, &mut scratch)?;
        if scratch.is_empty() {
            return Ok(());
        }

        let mut path = match suffix {
            Some(suffix) => join(scratch.as_str(), suffix),
            None => scratch.into_string(),
        };
        if trailing_separator {
            path = with_trailing_separator(&path);
        }
        out.set(&path)
    }

    fn config_directory(&self, out: &mut PathBuffer) -> Result<()> {
        let menu_config = self.config.menu_config_directory();
        if !menu_config.is_empty() {
            return out.set(&menu_config);
        }
        let config_path = self.config.config_path();
        if config_path.is_empty() {
            return Ok(());
        }
        out.set(&basedir(&config_path))
    }
}

impl fmt::Debug for SpecialDirectoryResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialDirectoryResolver")
            .field("data", &self.data)
            .field("skins", &self.skins)
            .finish_non_exhaustive()
    }
}
