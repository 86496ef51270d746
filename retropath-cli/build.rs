//! Build script for retropath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("retropath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand portable paths and resolve special directories")
        .long_about(
            "Expand and abbreviate ~ and : prefixed paths, locate the running \
             application and resolve the special directories of its menu skins",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file to load instead of the discovered one")
                .value_name("FILE")
                .global(true)
                .env("RETROPATH_CONFIG"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .help("Capacity of each output path in bytes, terminator included")
                .value_name("BYTES")
                .global(true)
                .default_value("4096"),
        )
        .subcommands(vec![
            Command::new("expand")
                .about("Expand ~ and : prefixed paths")
                .long_about("Replace a leading ~ with the home directory and : with the application directory"),
            Command::new("abbreviate")
                .about("Rewrite absolute paths in portable notation")
                .long_about("Replace the application directory with : or the home directory with ~"),
            Command::new("app-path")
                .about("Show the path of the running application")
                .long_about("Locate the running executable, or its directory with --base"),
            Command::new("data-dir")
                .about("Show the per-user application data directory")
                .long_about("Display the platform data root used for settings discovery"),
            Command::new("resolve")
                .about("Resolve one special directory")
                .long_about("Compose the path of a special directory from the loaded settings"),
            Command::new("list")
                .about("List every special directory")
                .long_about("Display every special directory kind with its resolved path"),
            Command::new("validate")
                .about("Validate a settings file")
                .long_about("Parse and check a retropath settings file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("retropath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
