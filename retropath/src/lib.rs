#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # retropath
//!
//! Portable path notation and special directory resolution.
//!
//! Settings files refer to locations relative to the user's home (`~/...`)
//! or to the directory holding the application (`:/...`), so they survive
//! moving an install between machines. This library expands and abbreviates
//! that notation, locates the running application and its per-user data
//! root, and composes the special directories a frontend needs (autoconfig
//! profiles, menu-config files, menu skin assets) from a settings snapshot.
//!
//! ## Core Types
//!
//! - [`PortablePathCodec`]: `~`/`:` expansion and abbreviation
//! - [`PathBuffer`]: bounded output buffer; every write fits or fails
//! - [`LocatorChain`] and [`ApplicationPathLocator`]: application discovery
//! - [`ApplicationDataLocator`]: per-user data root
//! - [`SpecialDirectoryResolver`] and [`DirectoryKind`]: special directories
//! - [`Settings`] and [`ConfigProvider`]: the settings snapshot
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use retropath::{PathBuffer, PortablePathCodec};
//!
//! let codec = PortablePathCodec::new(
//!     Some("/home/alice".to_string()),
//!     Some("/home/alice/retroarch".to_string()),
//! );
//! let mut buf = PathBuffer::default();
//!
//! codec.expand(":/cores", &mut buf).unwrap();
//! # #[cfg(unix)]
//! assert_eq!(buf.as_str(), "/home/alice/retroarch/cores");
//!
//! codec.abbreviate("/home/alice/saves", &mut buf).unwrap();
//! # #[cfg(unix)]
//! assert_eq!(buf.as_str(), "~/saves");
//! ```

pub mod buffer;
pub mod config;
pub mod data;
pub mod environment;
pub mod error;
pub mod locator;
pub mod logging;
pub mod path;
pub mod special;

// Re-export key types at crate root for convenience
pub use buffer::{PathBuffer, PATH_MAX_LENGTH};
pub use config::{ConfigBuilder, ConfigProvider, Settings};
pub use data::{AppIdentity, ApplicationDataLocator, DataConvention};
pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};
pub use error::{Error, Result};
pub use locator::{application_base_dir, ApplicationPathLocator, LocatorChain};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Notation, PortablePathCodec};
pub use special::{DirectoryKind, Skin, SkinSet, SpecialDirectoryResolver};
