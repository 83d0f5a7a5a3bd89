//! Per-currency balances held by the user.

use crate::core::catalog::TokenCatalog;
use crate::core::error::{ExchangeError, FormField};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Balance a currency gets when it first appears in the catalog.
pub const DEFAULT_STARTING_BALANCE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceEntry {
    pub currency: String,
    pub amount: f64,
}

/// Balances never go negative and every currency has at most one entry.
/// Entries are never removed, a spent balance stays at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceLedger {
    entries: Vec<BalanceEntry>,
    index: HashMap<String, usize>,
}

fn check_amount(amount: f64) -> Result<(), ExchangeError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ExchangeError::InvalidAmount(amount.to_string()))
    }
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads explicit balances. Later duplicates overwrite earlier ones.
    pub fn from_balances<I, S>(balances: I) -> Result<Self, ExchangeError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for (currency, amount) in balances {
            check_amount(amount)?;
            ledger.upsert(currency.into(), amount);
        }
        Ok(ledger)
    }

    /// A fresh ledger holding `starting_balance` of every catalog token.
    pub fn seeded(catalog: &TokenCatalog, starting_balance: f64) -> Result<Self, ExchangeError> {
        let mut ledger = Self::new();
        ledger.seed(catalog, starting_balance)?;
        Ok(ledger)
    }

    /// Adds `starting_balance` for each catalog currency the ledger does not
    /// hold yet. Returns how many entries were added.
    pub fn seed(
        &mut self,
        catalog: &TokenCatalog,
        starting_balance: f64,
    ) -> Result<usize, ExchangeError> {
        check_amount(starting_balance)?;
        let mut added = 0;
        for token in catalog.tokens() {
            if !self.index.contains_key(&token.currency) {
                self.upsert(token.currency.clone(), starting_balance);
                added += 1;
            }
        }
        debug!(added, starting_balance, "Seeded ledger");
        Ok(added)
    }

    pub fn get(&self, currency: &str) -> Option<f64> {
        self.index.get(currency).map(|&i| self.entries[i].amount)
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.index.contains_key(currency)
    }

    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        self.entries
            .iter()
            .map(|e| (e.currency.clone(), e.amount))
            .collect()
    }

    pub fn debit(&self, currency: &str, amount: f64) -> Result<Self, ExchangeError> {
        let mut next = self.clone();
        next.debit_in_place(currency, amount)?;
        Ok(next)
    }

    pub fn credit(&self, currency: &str, amount: f64) -> Result<Self, ExchangeError> {
        let mut next = self.clone();
        next.credit_in_place(currency, amount)?;
        Ok(next)
    }

    /// Debits `source` and credits `destination` in one step. Either both
    /// apply to the returned ledger or `self` is the only state there is.
    pub fn transfer(
        &self,
        source: &str,
        amount: f64,
        destination: &str,
        credited: f64,
    ) -> Result<Self, ExchangeError> {
        let mut next = self.clone();
        next.debit_in_place(source, amount)?;
        next.credit_in_place(destination, credited)?;
        Ok(next)
    }

    fn upsert(&mut self, currency: String, amount: f64) {
        match self.index.get(&currency) {
            Some(&i) => self.entries[i].amount = amount,
            None => {
                self.index.insert(currency.clone(), self.entries.len());
                self.entries.push(BalanceEntry { currency, amount });
            }
        }
    }

    fn entry_mut(
        &mut self,
        currency: &str,
        field: FormField,
    ) -> Result<&mut BalanceEntry, ExchangeError> {
        match self.index.get(currency) {
            Some(&i) => Ok(&mut self.entries[i]),
            None => Err(ExchangeError::unknown_token(currency, field)),
        }
    }

    fn debit_in_place(&mut self, currency: &str, amount: f64) -> Result<(), ExchangeError> {
        check_amount(amount)?;
        let entry = self.entry_mut(currency, FormField::Source)?;
        if amount > entry.amount {
            return Err(ExchangeError::InsufficientBalance {
                currency: currency.to_string(),
                requested: amount,
                available: entry.amount,
            });
        }
        entry.amount -= amount;
        Ok(())
    }

    fn credit_in_place(&mut self, currency: &str, amount: f64) -> Result<(), ExchangeError> {
        check_amount(amount)?;
        let entry = self.entry_mut(currency, FormField::Destination)?;
        let credited = entry.amount + amount;
        if !credited.is_finite() {
            return Err(ExchangeError::InvalidAmount(amount.to_string()));
        }
        entry.amount = credited;
        Ok(())
    }
}

impl Serialize for BalanceLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.currency, e.amount)))
    }
}
