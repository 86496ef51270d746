//! Primary application image from the loaded-image map.
//!
//! On Linux and Android `/proc/self/maps` lists every mapped region together
//! with the file backing it. Regions are sorted by address and the program
//! image is mapped below its shared libraries, so the first executable,
//! file-backed region belongs to the application itself.

use std::fs;
use std::path::{Path, PathBuf};

use super::ApplicationPathLocator;

const DELETED_SUFFIX: &str = " (deleted)";

/// Finds the primary application image in a maps listing.
#[derive(Debug, Clone)]
pub struct ImageMapLocator {
    maps_path: PathBuf,
}

impl ImageMapLocator {
    /// Read `/proc/self/maps`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_maps_path("/proc/self/maps")
    }

    /// Read the listing from another file.
    #[must_use]
    pub fn with_maps_path(path: impl Into<PathBuf>) -> Self {
        Self {
            maps_path: path.into(),
        }
    }

    /// The listing this locator reads.
    #[must_use]
    pub fn maps_path(&self) -> &Path {
        &self.maps_path
    }
}

impl Default for ImageMapLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationPathLocator for ImageMapLocator {
    fn name(&self) -> &'static str {
        "image-map"
    }

    fn try_locate(&self) -> Option<PathBuf> {
        let maps = fs::read_to_string(&self.maps_path)
            .map_err(|e| log::debug!("Cannot read {}: {e}", self.maps_path.display()))
            .ok()?;
        primary_image(&maps)
    }
}

/// The primary application image in a `/proc/<pid>/maps` listing.
///
/// Each line reads `address perms offset dev inode pathname`. The first line
/// whose permissions include execute and whose pathname is absolute names the
/// application image.
///
/// # Examples
///
/// ```
/// use retropath::locator::primary_image;
/// use std::path::PathBuf;
///
/// let maps = "\
/// 5581a000-5581b000 r--p 00000000 08:01 1234   /opt/retroarch/retroarch
/// 5581b000-5581f000 r-xp 00001000 08:01 1234   /opt/retroarch/retroarch
/// 7f0c2000-7f0e4000 r-xp 00022000 08:01 5678   /usr/lib/libc.so.6
/// ";
/// assert_eq!(primary_image(maps), Some(PathBuf::from("/opt/retroarch/retroarch")));
/// ```
#[must_use]
pub fn primary_image(maps: &str) -> Option<PathBuf> {
    maps.lines().find_map(|line| {
        let (fields, pathname) = split_line(line)?;
        let perms = fields[1];
        let inode = fields[4];
        if !perms.contains('x') || inode == "0" || !pathname.starts_with('/') {
            return None;
        }
        let pathname = pathname.strip_suffix(DELETED_SUFFIX).unwrap_or(pathname);
        Some(PathBuf::from(pathname))
    })
}

// Splits off the five fixed fields; the pathname keeps any inner spaces.
fn split_line(line: &str) -> Option<([&str; 5], &str)> {
    let mut fields = [""; 5];
    let mut rest = line;
    for field in &mut fields {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        *field = &rest[..end];
        rest = &rest[end..];
    }
    Some((fields, rest.trim()))
}
