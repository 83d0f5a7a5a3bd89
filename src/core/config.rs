use crate::core::ledger::DEFAULT_STARTING_BALANCE;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_FEED_URL: &str = "https://interview.switcheo.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SwitcheoProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FileProviderConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub switcheo: Option<SwitcheoProviderConfig>,
    pub file: Option<FileProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            switcheo: Some(SwitcheoProviderConfig {
                base_url: DEFAULT_FEED_URL.to_string(),
            }),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TokenPair {
    pub from: String,
    pub to: String,
}

impl Default for TokenPair {
    fn default() -> Self {
        TokenPair {
            from: "ETH".to_string(),
            to: "USD".to_string(),
        }
    }
}

fn default_starting_balance() -> f64 {
    DEFAULT_STARTING_BALANCE
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_starting_balance")]
    pub starting_balance: f64,
    /// Balances that replace the starting balance for specific currencies.
    #[serde(default)]
    pub balances: BTreeMap<String, f64>,
    #[serde(default)]
    pub default_pair: TokenPair,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            balances: BTreeMap::new(),
            default_pair: TokenPair::default(),
        }
    }
}

impl AppConfig {
    /// Loads `path` if given. Without a path the default location is used
    /// when it exists, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }
        let default_path = Self::default_config_path()?;
        if default_path.exists() {
            Self::load_from_path(&default_path)
        } else {
            debug!(
                "No config at {}, using built-in defaults",
                default_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "tokswap", "tokswap")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .check()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        let usable = |amount: f64| amount.is_finite() && amount >= 0.0;
        if !usable(self.starting_balance) {
            bail!(
                "starting_balance must be a non-negative number, got {}",
                self.starting_balance
            );
        }
        if let Some((currency, amount)) = self.balances.iter().find(|(_, a)| !usable(**a)) {
            bail!("Balance for {currency} must be a non-negative number, got {amount}");
        }
        Ok(())
    }
}
