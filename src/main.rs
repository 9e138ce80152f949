use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use exrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for exrate::AppCommand {
    fn from(cmd: Commands) -> exrate::AppCommand {
        match cmd {
            Commands::List { unit } => exrate::AppCommand::List { unit },
            Commands::Rate { src, target } => exrate::AppCommand::Rate {
                src_unit: src,
                target_unit: target,
            },
            Commands::Convert {
                src,
                target,
                amount,
            } => exrate::AppCommand::Convert {
                src_unit: src,
                target_unit: target,
                amount,
            },
            Commands::Watch { unit } => exrate::AppCommand::Watch { unit },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all rates relative to a currency (defaults to the base unit)
    List { unit: Option<String> },
    /// Show the rate from one currency to another
    Rate { src: String, target: String },
    /// Convert an amount between currencies
    Convert {
        src: String,
        target: String,
        amount: f64,
    },
    /// Keep refreshing rates in the background and print them after every sync
    Watch { unit: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => exrate::cli::setup::setup(),
        Some(cmd) => exrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
