//! The token catalog: current prices and display metadata keyed by symbol.

use crate::core::error::ExchangeError;
use crate::core::feed::PriceRecord;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

const ICON_BASE_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Symbols whose icon is published under a different name than the feed uses.
const DISPLAY_RENAMES: [(&str, &str); 5] = [
    ("STEVMOS", "stEVMOS"),
    ("RATOM", "rATOM"),
    ("STOSMO", "stOSMO"),
    ("STATOM", "stATOM"),
    ("STLUNA", "stLUNA"),
];

pub fn display_name(currency: &str) -> &str {
    DISPLAY_RENAMES
        .iter()
        .find(|(symbol, _)| *symbol == currency)
        .map_or(currency, |(_, name)| *name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenMetadata {
    pub display_name: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub currency: String,
    pub price: f64,
    pub metadata: TokenMetadata,
}

impl Token {
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}.svg", self.metadata.display_name)
    }

    /// A price the engine can divide by.
    pub fn has_usable_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Immutable snapshot of known tokens. Refreshing means loading a new catalog.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
    index: HashMap<String, usize>,
}

impl TokenCatalog {
    /// Builds a catalog from raw feed records, keeping the first record seen
    /// for each symbol.
    pub fn load(records: &[PriceRecord]) -> Result<Self, ExchangeError> {
        if records.is_empty() {
            return Err(ExchangeError::CatalogEmpty);
        }

        let mut catalog = TokenCatalog::default();
        for record in records {
            if catalog.index.contains_key(&record.currency) {
                debug!(currency = %record.currency, "Skipping duplicate price record");
                continue;
            }
            catalog
                .index
                .insert(record.currency.clone(), catalog.tokens.len());
            catalog.tokens.push(Token {
                currency: record.currency.clone(),
                price: record.price,
                metadata: TokenMetadata {
                    display_name: display_name(&record.currency).to_string(),
                    updated_at: record.date,
                },
            });
        }

        debug!(
            records = records.len(),
            tokens = catalog.tokens.len(),
            "Loaded token catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, currency: &str) -> Option<&Token> {
        self.index.get(currency).map(|&i| &self.tokens[i])
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.index.contains_key(currency)
    }

    /// Tokens in first-seen feed order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
