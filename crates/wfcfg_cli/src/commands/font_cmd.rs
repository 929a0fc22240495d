//! The `font` subcommand: display fonts of the Workflows GUI.

use clap::Args;
use tracing::instrument;
use wfcfg_core::{FontConfigurator, FontDescriptor, FontStyle, RenderedFile};
use wfcfg_core::{ALL_COMPONENTS, GUI_COMPONENTS};

use super::CommandContext;
use crate::errors::Error;

#[cfg(test)]
#[path = "font_cmd_tests.rs"]
mod tests;

/// Modify display font settings of the Workflows GUI
#[derive(Args, Debug, Clone)]
#[command(arg_required_else_help = true)]
pub struct FontArgs {
    /// Affected UI component, or ALL
    #[arg(value_parser = parse_component)]
    pub component: String,

    /// Font type (name)
    #[arg(value_name = "TYPE")]
    pub typeface: String,

    /// Font size (in points)
    pub size: u32,

    /// Font style
    #[arg(value_parser = ["plain", "bold", "italic"])]
    pub style: String,
}

/// Accepts `ALL` in any case or one of the known GUI component names.
pub fn parse_component(s: &str) -> Result<String, String> {
    if s.eq_ignore_ascii_case(ALL_COMPONENTS) || GUI_COMPONENTS.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "unknown component `{}`, expected {} or one of: {}",
            s,
            ALL_COMPONENTS,
            GUI_COMPONENTS.join(", ")
        ))
    }
}

/// Execute the font command
#[instrument(skip(ctx))]
pub fn execute(args: &FontArgs, ctx: &CommandContext<'_>) -> Result<Vec<RenderedFile>, Error> {
    let style: FontStyle = args.style.parse()?;
    let font = FontDescriptor::new(args.typeface.clone(), style, args.size);

    let mut fonts =
        FontConfigurator::new(ctx.font_files.iter().cloned()).with_lock_policy(ctx.lock_policy);
    fonts.update(&args.component, &font);
    Ok(fonts.run(ctx.test_run)?)
}
