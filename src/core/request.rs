//! Raw swap form input and the typed request parsed from it.

use crate::core::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An amount as typed into the form, or as passed programmatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// `None` for blank text; otherwise the parsed value, which may still be
    /// non-finite or non-positive.
    pub fn parse(&self) -> Option<Result<f64, ExchangeError>> {
        match self {
            AmountInput::Number(n) => Some(Ok(*n)),
            AmountInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(
                    text.parse::<f64>()
                        .map_err(|_| ExchangeError::InvalidAmount(text.to_string())),
                )
            }
        }
    }

    /// The numeric value if it is usable for a preview.
    pub fn value(&self) -> Option<f64> {
        match self.parse() {
            Some(Ok(n)) if n.is_finite() => Some(n),
            _ => None,
        }
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        AmountInput::Number(n)
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        AmountInput::Text(text.to_string())
    }
}

impl Display for AmountInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountInput::Number(n) => write!(f, "{n}"),
            AmountInput::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Current form values; any field may still be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapForm {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<AmountInput>,
}

impl SwapForm {
    pub fn new(from: &str, to: &str, amount: impl Into<AmountInput>) -> Self {
        Self {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            amount: Some(amount.into()),
        }
    }
}

fn selected(symbol: &Option<String>) -> Option<&str> {
    symbol.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A fully specified swap. Only [`ExchangeRequest::parse`] and
/// [`ExchangeRequest::new`] build one, so the amount is always finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRequest {
    source: String,
    destination: String,
    amount: f64,
}

impl ExchangeRequest {
    pub fn new(source: &str, destination: &str, amount: f64) -> Result<Self, ExchangeError> {
        Self::parse(&SwapForm::new(source, destination, amount))
    }

    /// Checks that every field is present and the amount is a positive number.
    /// Fields are checked source, destination, amount; the first problem wins.
    pub fn parse(form: &SwapForm) -> Result<Self, ExchangeError> {
        let source = selected(&form.from).ok_or(ExchangeError::MissingSourceToken)?;
        let destination = selected(&form.to).ok_or(ExchangeError::MissingDestinationToken)?;
        let amount = form
            .amount
            .as_ref()
            .and_then(AmountInput::parse)
            .ok_or(ExchangeError::MissingAmount)??;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExchangeError::InvalidAmount(amount.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            amount,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}
