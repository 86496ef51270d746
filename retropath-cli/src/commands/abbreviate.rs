//! Command to abbreviate absolute paths.

use crate::error::CliError;
use crate::utils::{print_each, process_codec, GlobalOptions};
use clap::Args;

/// Rewrite absolute paths in portable notation.
#[derive(Args)]
pub struct AbbreviateCommand {
    /// Paths to abbreviate; paths outside both anchors are printed unchanged
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl AbbreviateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let codec = process_codec();
        print_each(&self.paths, global, |input, out| codec.abbreviate(input, out))
    }
}
