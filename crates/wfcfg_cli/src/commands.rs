//! Command modules for the wfcfg CLI.
//!
//! Each submodule handles one subcommand:
//!
//! - `main_cmd`: raw preference updates, screen printer and window layout
//! - `paper_cmd`: screen printer paper settings
//! - `font_cmd`: client display fonts
//! - `receipt_cmd`: receipt printer, its font and its paper

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use wfcfg_core::{LockPolicy, PrinterDiscovery, RenderedFile};

pub mod font_cmd;
pub mod main_cmd;
pub mod paper_cmd;
pub mod receipt_cmd;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Everything a command needs besides its own arguments.
pub struct CommandContext<'a> {
    /// Copies of the `preference` file to update
    pub preference_files: BTreeSet<PathBuf>,

    /// Copies of the `font` file to update
    pub font_files: BTreeSet<PathBuf>,

    pub printers: &'a dyn PrinterDiscovery,

    pub lock_policy: LockPolicy,

    /// Compute the new file contents without writing them
    pub test_run: bool,
}

/// Writes a summary of a run over `targets` to `out`.
///
/// A test run shows the content each file would have been given.
pub fn write_report(
    out: &mut impl Write,
    targets: &BTreeSet<PathBuf>,
    rendered: &[RenderedFile],
    test_run: bool,
) -> io::Result<()> {
    if targets.is_empty() {
        return writeln!(out, "No property files found.");
    }
    if rendered.is_empty() {
        return writeln!(out, "No changes staged.");
    }
    for file in rendered {
        if test_run {
            writeln!(out, "Would update {}:", file.path.display())?;
            writeln!(out, "{}", file.content)?;
        } else {
            writeln!(out, "Updated {}", file.path.display())?;
        }
    }
    Ok(())
}
