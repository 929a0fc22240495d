//! The `receipt-printer` subcommand.

use clap::{ArgGroup, Args};
use tracing::{info, instrument};
use wfcfg_core::{ReceiptPrinter, RenderedFile};

use super::CommandContext;
use crate::errors::Error;

#[cfg(test)]
#[path = "receipt_cmd_tests.rs"]
mod tests;

/// Modify receipt printer settings
#[derive(Args, Debug, Clone, Default)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("printer").args(["find", "add", "remove"])))]
pub struct ReceiptArgs {
    /// Use the first installed printer among these names as receipt
    /// printer, or disable the receipt printer if none is installed
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub find: Vec<String>,

    /// Use this printer as receipt printer
    #[arg(long, value_name = "NAME")]
    pub add: Option<String>,

    /// Disable the receipt printer in Workflows
    #[arg(long)]
    pub remove: bool,

    /// Font size (in pt)
    #[arg(long, help_heading = "Font")]
    pub font_size: Option<u32>,

    /// Font typeface (name)
    #[arg(long, help_heading = "Font")]
    pub font_type: Option<String>,

    #[arg(long, help_heading = "Font", value_parser = ["regular", "bold", "italic"])]
    pub font_style: Option<String>,

    /// Set paper margins in the following order: top right bottom left
    #[arg(long, num_args = 1.., value_name = "MARGIN", help_heading = "Paper")]
    pub paper_margins: Vec<f64>,

    #[arg(long, help_heading = "Paper", value_parser = ["centi", "inch"])]
    pub paper_units: Option<String>,

    /// Set paper width in terms of units
    #[arg(long, help_heading = "Paper")]
    pub paper_width: Option<f64>,
}

/// Execute the receipt-printer command
#[instrument(skip(ctx))]
pub fn execute(args: &ReceiptArgs, ctx: &CommandContext<'_>) -> Result<Vec<RenderedFile>, Error> {
    let mut printer = ReceiptPrinter::new(ctx.preference_files.iter().cloned())?
        .with_lock_policy(ctx.lock_policy);

    if !args.find.is_empty() {
        match printer.add_from(ctx.printers, &args.find)? {
            Some(name) => info!(message = "Found receipt printer", printer = %name),
            None => info!(message = "Found no receipt printer, disabling it"),
        }
    }
    if let Some(name) = &args.add {
        printer.add(name)?;
    }
    if args.remove {
        printer.remove()?;
    }

    let paper = printer.paper_mut();
    if let Some(units) = &args.paper_units {
        paper.set_units(units)?;
    }
    if let Some(width) = args.paper_width {
        paper.set_width(width)?;
    }
    if !args.paper_margins.is_empty() {
        paper.set_margins(&args.paper_margins)?;
    }

    let font = printer.font_mut()?;
    if let Some(size) = args.font_size {
        font.set_size(size);
    }
    if let Some(name) = &args.font_type {
        font.set_name(name.clone());
    }
    if let Some(style) = &args.font_style {
        font.set_style(style)?;
    }

    Ok(printer.run(ctx.test_run)?)
}
