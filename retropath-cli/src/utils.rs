//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: building the
//! codec from the running process, loading settings and printing paths.

use crate::error::CliError;
use retropath::{
    ConfigBuilder, LocatorChain, PathBuffer, PortablePathCodec, ProcessEnvironment, Settings,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// `--verbose` only configures the logger.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Settings file overriding discovery.
    pub config: Option<PathBuf>,

    /// Capacity of every output buffer.
    pub capacity: usize,
}

impl GlobalOptions {
    /// An empty buffer with the configured capacity.
    pub fn buffer(&self) -> PathBuffer {
        PathBuffer::new(self.capacity)
    }
}

/// Codec anchored at the current user's home and this binary's directory.
pub fn process_codec() -> PortablePathCodec {
    PortablePathCodec::from_environment(&ProcessEnvironment, &LocatorChain::platform())
}

/// Load settings for the resolving commands.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or the one found in the data directory
/// 3. Built-in defaults (lowest priority)
///
/// Portable tokens in the result are expanded against [`process_codec`].
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new()
        .expand_with(process_codec())
        .with_capacity(global.capacity);

    if let Some(path) = &global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    Ok(builder.build()?)
}

/// Run `transform` over each input and print one result per line.
pub fn print_each<F>(inputs: &[String], global: &GlobalOptions, transform: F) -> Result<(), CliError>
where
    F: Fn(&str, &mut PathBuffer) -> retropath::Result<()>,
{
    if inputs.is_empty() {
        return Err(CliError::InvalidArguments("no paths given".to_string()));
    }

    let mut buf = global.buffer();
    for input in inputs {
        transform(input, &mut buf)?;
        println!("{buf}");
    }
    Ok(())
}
