//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `expand`: Expand portable paths
//! - `abbreviate`: Abbreviate absolute paths
//! - `app_path`: Show the located application path
//! - `data_dir`: Show the application data directory
//! - `resolve`: Resolve one special directory
//! - `list`: List every special directory
//! - `validate`: Validate a settings file
//! - `completions`: Generate shell completion scripts

pub mod abbreviate;
pub mod app_path;
pub mod completions;
pub mod data_dir;
pub mod expand;
pub mod list;
pub mod resolve;
pub mod validate;

pub use abbreviate::AbbreviateCommand;
pub use app_path::AppPathCommand;
pub use completions::CompletionsCommand;
pub use data_dir::DataDirCommand;
pub use expand::ExpandCommand;
pub use list::{ListCommand, ListFormat};
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
