//! The `main` subcommand: direct edits of the Workflows preference files.

use clap::Args;
use tracing::{info, instrument};
use wfcfg_core::{Configurator, RenderedFile};

use super::CommandContext;
use crate::errors::Error;

#[cfg(test)]
#[path = "main_cmd_tests.rs"]
mod tests;

/// Preference key holding the screen printer.
pub const SCREEN_PRINTER_KEY: &str = "peripherals.screen.printer";

/// Desktop settings giving Workflows tabbed windows at the top.
pub const TABBED_WINDOWS: [(&str, &str); 3] = [
    ("desktop.multiple_windows", "N"),
    ("desktop.tabbed_windows", "Y"),
    ("desktop.tabbed_window_bottom", "N"),
];

/// Modify preferences of the Workflows GUI
#[derive(Args, Debug, Clone, Default)]
#[command(arg_required_else_help = true)]
pub struct MainArgs {
    /// Set preference keys
    #[arg(long, num_args = 1.., value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub update: Vec<(String, String)>,

    /// Remove preference keys
    #[arg(long, num_args = 1.., value_name = "KEY")]
    pub delete: Vec<String>,

    /// Use the first installed printer among these names as screen printer
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub find_printer: Vec<String>,

    /// Use this printer as screen printer
    #[arg(long, value_name = "NAME")]
    pub add_printer: Option<String>,

    /// Change desktop settings to use tabbed windows
    #[arg(long)]
    pub tabbed_windows: bool,
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Execute the main command
#[instrument(skip(ctx))]
pub fn execute(args: &MainArgs, ctx: &CommandContext<'_>) -> Result<Vec<RenderedFile>, Error> {
    if let Some((_, value)) = args.update.iter().find(|(key, _)| key.trim().is_empty()) {
        return Err(Error::InvalidArguments(format!(
            "empty key in update `={}`",
            value
        )));
    }

    let mut cfg =
        Configurator::new(ctx.preference_files.iter().cloned()).with_lock_policy(ctx.lock_policy);

    cfg.batch_update(args.update.iter().cloned());
    for key in &args.delete {
        cfg.delete(key);
    }

    if !args.find_printer.is_empty() {
        match ctx.printers.find(&args.find_printer).into_iter().next() {
            Some(printer) => {
                info!(message = "Found screen printer", printer = %printer);
                cfg.update(SCREEN_PRINTER_KEY, printer);
            }
            None => info!(message = "No screen printer found", candidates = ?args.find_printer),
        }
    }
    if let Some(printer) = &args.add_printer {
        cfg.update(SCREEN_PRINTER_KEY, printer);
    }
    if args.tabbed_windows {
        cfg.batch_update(TABBED_WINDOWS);
    }

    Ok(cfg.run(ctx.test_run)?)
}
