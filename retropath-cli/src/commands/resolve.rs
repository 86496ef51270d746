//! Command to resolve a single special directory.

use crate::error::CliError;
use crate::utils::{load_settings, GlobalOptions};
use clap::Args;
use retropath::{DirectoryKind, ProcessEnvironment, SkinSet, SpecialDirectoryResolver};

/// Resolve one special directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Directory kind, e.g. `autoconfig` or `xmb-icons`
    #[arg(value_name = "KIND")]
    pub kind: DirectoryKind,

    /// Enabled menu skins (`xmb,materialui`, `all` or `none`)
    #[arg(long, value_name = "LIST")]
    pub skins: Option<SkinSet>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let mut resolver = SpecialDirectoryResolver::new(&settings, &ProcessEnvironment);
        if let Some(skins) = self.skins {
            resolver = resolver.with_skins(skins);
        }

        if !resolver.is_enabled(self.kind) {
            return Err(CliError::SemanticFailure(format!(
                "{} is not available with skins '{}'",
                self.kind,
                resolver.skins()
            )));
        }

        let mut buf = global.buffer();
        resolver.require(self.kind, &mut buf)?;

        println!("{buf}");
        Ok(())
    }
}
