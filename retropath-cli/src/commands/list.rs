//! Command to list every special directory.

use crate::error::CliError;
use crate::utils::{load_settings, GlobalOptions};
use clap::{Args, ValueEnum};
use retropath::{DirectoryKind, ProcessEnvironment, SkinSet, SpecialDirectoryResolver};
use serde::Serialize;
use std::io::{self, Write};

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned table
    Human,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct Entry<'a> {
    kind: DirectoryKind,
    enabled: bool,
    path: &'a str,
}

/// List every special directory with its resolved path.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Human)]
    pub format: ListFormat,

    /// Enabled menu skins (`xmb,materialui`, `all` or `none`)
    #[arg(long, value_name = "LIST")]
    pub skins: Option<SkinSet>,
}

impl ListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let mut resolver = SpecialDirectoryResolver::new(&settings, &ProcessEnvironment);
        if let Some(skins) = self.skins {
            resolver = resolver.with_skins(skins);
        }

        let resolved = resolver.resolve_all(global.capacity)?;
        let entries: Vec<Entry<'_>> = resolved
            .iter()
            .map(|(kind, path)| Entry {
                kind: *kind,
                enabled: resolver.is_enabled(*kind),
                path,
            })
            .collect();

        let mut stdout = io::stdout().lock();
        match self.format {
            ListFormat::Human => write_table(&mut stdout, &entries)?,
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
                writeln!(stdout, "{json}")?;
            }
        }
        Ok(())
    }
}

fn write_table(out: &mut impl Write, entries: &[Entry<'_>]) -> io::Result<()> {
    let width = entries
        .iter()
        .map(|entry| entry.kind.name().len())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let path = match (entry.enabled, entry.path) {
            (false, _) => "(disabled)",
            (true, "") => "-",
            (true, path) => path,
        };
        writeln!(out, "{:<width$}  {path}", entry.kind.name())?;
    }
    Ok(())
}
