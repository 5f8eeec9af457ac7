//! cta-builder CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use cta_builder_cli_lib::{
    settings, CatalogCommand, GenerateCommand, OemCommand, ValidateCommand, WizardCommand,
};

#[derive(Parser)]
#[command(name = "cta-builder")]
#[command(version)]
#[command(about = "Build CTA buttons for dealer sites", long_about = None)]
struct Cli {
    /// Configuration file (replaces the standard search locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the catalog JSON files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure CTAs step by step
    Wizard {
        /// Continue from an exported state
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Where to write the generated code
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate HTML/CSS from an exported state
    Generate {
        /// State file written by the wizard
        state: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write a standalone preview page
        #[arg(long)]
        preview: bool,
        /// Generate even if the state has validation errors
        #[arg(long)]
        force: bool,
    },
    /// Check an exported state
    Validate {
        /// State file written by the wizard
        state: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog entries
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Maintain OEM palettes
    Oem {
        #[command(subcommand)]
        command: OemCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = settings::resolve(cli.config.as_deref(), cli.data_dir, cli.verbose)?;
    settings::init_logging(&config.logging)?;

    match cli.command {
        Commands::Wizard { resume, output } => {
            let cmd = WizardCommand::new(config, resume, output);
            cmd.execute()?;
        }
        Commands::Generate {
            state,
            output,
            preview,
            force,
        } => {
            let cmd = GenerateCommand::new(config, state, output, preview, force);
            cmd.execute()?;
        }
        Commands::Validate { state, json } => {
            let cmd = ValidateCommand::new(config, state, json);
            cmd.execute()?;
        }
        Commands::Catalog { command } => {
            command.execute(&config)?;
        }
        Commands::Oem { command } => {
            command.execute(&config)?;
        }
    }

    Ok(())
}
