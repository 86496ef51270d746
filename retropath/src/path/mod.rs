//! Path composition and portable path notation.
//!
//! This module provides:
//! - [`join`](join::join) and related string helpers for composing paths
//! - [`PortablePathCodec`], which expands `~` and `:` tokens and abbreviates
//!   absolute paths back into token form

pub mod codec;
pub mod join;

#[cfg(all(test, unix))]
mod proptests;

pub use codec::{Notation, PortablePathCodec};
pub use join::{
    basedir, ends_with_separator, join, parent_dir, starts_with_separator,
    strip_trailing_separators, with_trailing_separator, SEPARATOR,
};
