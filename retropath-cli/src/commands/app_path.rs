//! Command to show the located application path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use retropath::locator::{application_base_dir, require_application_path};
use retropath::{Error, LocatorChain};

/// Show the path of the running application.
#[derive(Args)]
pub struct AppPathCommand {
    /// Print the directory containing the application instead
    #[arg(long)]
    pub base: bool,
}

impl AppPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let chain = LocatorChain::platform();
        log::debug!("Locator strategies: {:?}", chain.strategy_names());

        let mut buf = global.buffer();
        require_application_path(&chain, &mut buf)?;

        if self.base {
            let base = application_base_dir(&chain).ok_or_else(|| Error::PathNotResolved {
                what: "application base directory".to_string(),
            })?;
            buf.set(&base)?;
        }

        println!("{buf}");
        Ok(())
    }
}
