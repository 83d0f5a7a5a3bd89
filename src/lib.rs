pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{BalanceLedger, ExchangeController, PriceFeedProvider, PriceRecord, TokenCatalog};
use anyhow::{Context, Result};
use tracing::{debug, info};

pub enum AppCommand {
    Tokens,
    Wallet,
    Quote {
        from: String,
        to: String,
        amount: String,
    },
    Swap {
        from: String,
        to: String,
        amount: String,
    },
    Session,
}

/// Catalog snapshot plus the ledger seeded from it at session start.
#[derive(Debug, Clone)]
pub struct Market {
    pub catalog: TokenCatalog,
    pub ledger: BalanceLedger,
}

impl Market {
    /// Builds the catalog from raw records, then seeds configured balances
    /// followed by the starting balance for every other token.
    pub fn from_records(records: &[PriceRecord], config: &AppConfig) -> Result<Self> {
        let catalog = TokenCatalog::load(records).context("Price feed returned no tokens")?;
        let mut ledger = BalanceLedger::from_balances(
            config
                .balances
                .iter()
                .map(|(currency, amount)| (currency.clone(), *amount)),
        )?;
        ledger.seed(&catalog, config.starting_balance)?;
        Ok(Self { catalog, ledger })
    }
}

pub async fn load_market(config: &AppConfig, feed: &dyn PriceFeedProvider) -> Result<Market> {
    let pb = cli::ui::new_spinner("Fetching prices...");
    let records = feed.fetch_prices().await;
    pb.finish_and_clear();

    let market = Market::from_records(&records?, config)?;
    debug!(
        tokens = market.catalog.len(),
        balances = market.ledger.len(),
        "Market ready"
    );
    Ok(market)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Token swap starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    let feed = providers::feed_from_config(&config.providers);
    let market = load_market(&config, feed.as_ref()).await?;

    match command {
        AppCommand::Tokens => cli::tokens::run(&market.catalog),
        AppCommand::Wallet => cli::wallet::run(&market.ledger, &market.catalog),
        AppCommand::Quote { from, to, amount } => {
            cli::quote::run(&market.catalog, &from, &to, &amount)
        }
        AppCommand::Swap { from, to, amount } => {
            cli::swap::run(&market.catalog, &market.ledger, &from, &to, &amount)?;
        }
        AppCommand::Session => {
            let controller =
                ExchangeController::with_pair(&config.default_pair.from, &config.default_pair.to);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cli::session::run(
                stdin.lock(),
                &mut stdout,
                &market.catalog,
                market.ledger,
                controller,
            )?;
        }
    }
    Ok(())
}
