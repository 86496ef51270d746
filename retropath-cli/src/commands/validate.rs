//! Command to validate a settings file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use retropath::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a settings file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Settings file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.file.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.file.display()
            )));
        }

        let settings = match ConfigLoader::load_file(&self.file) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::Config("settings file is invalid".to_string()));
            }
        };

        match ConfigValidator::validate(&settings) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::Config("settings validation failed".to_string()))
            }
        }
    }
}
