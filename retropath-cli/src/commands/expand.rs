//! Command to expand portable paths.

use crate::error::CliError;
use crate::utils::{print_each, process_codec, GlobalOptions};
use clap::Args;

/// Expand `~` and `:` prefixed paths.
#[derive(Args)]
pub struct ExpandCommand {
    /// Paths to expand; untokened paths are printed unchanged
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let codec = process_codec();
        print_each(&self.paths, global, |input, out| codec.expand(input, out))
    }
}
