use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wfcfg_cli::commands::{
    self, font_cmd::FontArgs, main_cmd::MainArgs, paper_cmd::PaperArgs,
    receipt_cmd::ReceiptArgs, CommandContext,
};
use wfcfg_cli::config::AppConfig;
use wfcfg_cli::discovery::SystemPrinters;
use wfcfg_cli::errors::Error;
use wfcfg_core::{PropertyFileProvider, FONT_FILE, PREFERENCE_FILE};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// wfcfg: Update Sirsi Workflows client configuration files
#[derive(Parser, Debug)]
#[command(name = "wfcfg", version)]
#[command(about = "Update Sirsi Workflows client configuration files", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Simulated run: show the changes without writing them to disk
    #[arg(long, global = true)]
    test: bool,

    /// Path to the tool configuration file (default: ./wfcfg.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Workflows directory to update; replaces the configured directories
    #[arg(long = "dir", global = true, value_name = "DIR")]
    dirs: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Modify preferences of the Workflows GUI
    Main(MainArgs),

    /// Paper settings for the "screen printer"
    Paper(PaperArgs),

    /// Modify display font settings of the Workflows GUI
    Font(FontArgs),

    /// Modify receipt printer settings
    ReceiptPrinter(ReceiptArgs),
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = AppConfig::resolve(cli.config.as_deref())?;
    let directories = config.property_directories(&cli.dirs);
    debug!(message = "Workflows directories", dirs = ?directories.directories());

    let printers = SystemPrinters::new(config.printers.installed.clone());
    let ctx = CommandContext {
        preference_files: directories.property_files(PREFERENCE_FILE)?,
        font_files: directories.property_files(FONT_FILE)?,
        printers: &printers,
        lock_policy: config.lock_policy(),
        test_run: cli.test,
    };

    let rendered = match &cli.command {
        Commands::Main(args) => commands::main_cmd::execute(args, &ctx)?,
        Commands::Paper(args) => commands::paper_cmd::execute(args, &ctx)?,
        Commands::Font(args) => commands::font_cmd::execute(args, &ctx)?,
        Commands::ReceiptPrinter(args) => commands::receipt_cmd::execute(args, &ctx)?,
    };

    let targets = match &cli.command {
        Commands::Font(_) => &ctx.font_files,
        _ => &ctx.preference_files,
    };
    commands::write_report(&mut io::stdout().lock(), targets, &rendered, cli.test)
        .map_err(|_| Error::StdOutWriteFailed)
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("WFCFG_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
