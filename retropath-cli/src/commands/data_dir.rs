//! Command to show the application data directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use retropath::{ApplicationDataLocator, ProcessEnvironment};

/// Show the per-user application data directory.
#[derive(Args)]
pub struct DataDirCommand {}

impl DataDirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let locator = ApplicationDataLocator::new(&ProcessEnvironment);
        let mut buf = global.buffer();
        locator.require(&mut buf)?;

        println!("{buf}");
        Ok(())
    }
}
