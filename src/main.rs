use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tokswap::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for tokswap::AppCommand {
    fn from(cmd: Commands) -> tokswap::AppCommand {
        match cmd {
            Commands::Tokens => tokswap::AppCommand::Tokens,
            Commands::Wallet => tokswap::AppCommand::Wallet,
            Commands::Quote { from, to, amount } => {
                tokswap::AppCommand::Quote { from, to, amount }
            }
            Commands::Swap { from, to, amount } => tokswap::AppCommand::Swap { from, to, amount },
            Commands::Session => tokswap::AppCommand::Session,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List known tokens and their prices
    Tokens,
    /// Display the starting wallet
    Wallet,
    /// Show what an amount converts to, without swapping
    Quote {
        from: String,
        to: String,
        /// Amount of FROM to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Swap an amount of one token into another
    Swap {
        from: String,
        to: String,
        /// Amount of FROM to swap
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Run several swaps read from stdin against one wallet
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => tokswap::cli::setup::setup(),
        Some(cmd) => tokswap::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
