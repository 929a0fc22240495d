//! The `paper` subcommand: page setup of the screen printer.

use clap::Args;
use tracing::instrument;
use wfcfg_core::{Configurator, Paper, RenderedFile};

use super::CommandContext;
use crate::errors::Error;

#[cfg(test)]
#[path = "paper_cmd_tests.rs"]
mod tests;

/// Paper settings for the "screen printer"
#[derive(Args, Debug, Clone, Default)]
#[command(arg_required_else_help = true)]
pub struct PaperArgs {
    /// Set all margins to the same value by providing a single number, or
    /// each margin by providing four numbers: top, right, bottom and left
    #[arg(long, num_args = 1.., value_name = "MARGIN")]
    pub margins: Vec<f64>,

    #[arg(long, value_parser = ["centi", "inch"])]
    pub units: Option<String>,

    #[arg(long, value_parser = ["landscape", "portrait"])]
    pub orientation: Option<String>,

    #[arg(long, value_parser = ["a4", "custom", "legal", "letter", "receipt"])]
    pub size: Option<String>,
}

/// Execute the paper command
#[instrument(skip(ctx))]
pub fn execute(args: &PaperArgs, ctx: &CommandContext<'_>) -> Result<Vec<RenderedFile>, Error> {
    let mut paper = Paper::new()?;
    if !args.margins.is_empty() {
        paper.set_margins(&args.margins)?;
    }
    if let Some(units) = &args.units {
        paper.set_units(units)?;
    }
    if let Some(orientation) = &args.orientation {
        paper.set_orientation(orientation)?;
    }
    if let Some(size) = &args.size {
        paper.set_size(size)?;
    }

    let mut cfg =
        Configurator::new(ctx.preference_files.iter().cloned()).with_lock_policy(ctx.lock_policy);
    cfg.batch_update(paper.settings());
    Ok(cfg.run(ctx.test_run)?)
}
