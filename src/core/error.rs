//! Typed failures of the swap core.

use thiserror::Error;

/// The form field an error belongs to, so callers can attach the message to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Source,
    Destination,
    Amount,
    Catalog,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("Please select a \"From Token\" first.")]
    MissingSourceToken,

    #[error("Please select a \"To Token\".")]
    MissingDestinationToken,

    #[error("Amount is required")]
    MissingAmount,

    #[error("Amount must be a positive number: {0}")]
    InvalidAmount(String),

    #[error("Invalid token selected: {currency}")]
    UnknownToken { currency: String, field: FormField },

    #[error(
        "Amount must be less than or equal your number of token ({requested} > {available} {currency})"
    )]
    InsufficientBalance {
        currency: String,
        requested: f64,
        available: f64,
    },

    #[error("Token has no usable price: {0}")]
    InvalidPrice(String),

    #[error("Token catalog is empty")]
    CatalogEmpty,
}

impl ExchangeError {
    pub(crate) fn unknown_token(currency: &str, field: FormField) -> Self {
        ExchangeError::UnknownToken {
            currency: currency.to_string(),
            field,
        }
    }

    pub fn field(&self) -> FormField {
        match self {
            ExchangeError::MissingSourceToken => FormField::Source,
            ExchangeError::UnknownToken { field, .. } => *field,
            ExchangeError::MissingDestinationToken => FormField::Destination,
            ExchangeError::MissingAmount
            | ExchangeError::InvalidAmount(_)
            | ExchangeError::InsufficientBalance { .. } => FormField::Amount,
            ExchangeError::InvalidPrice(_) | ExchangeError::CatalogEmpty => FormField::Catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_distinct_message() {
        let errors = [
            ExchangeError::MissingSourceToken,
            ExchangeError::MissingDestinationToken,
            ExchangeError::MissingAmount,
            ExchangeError::InvalidAmount("abc".to_string()),
            ExchangeError::UnknownToken {
                currency: "XYZ".to_string(),
                field: FormField::Destination,
            },
            ExchangeError::InsufficientBalance {
                currency: "ETH".to_string(),
                requested: 11.0,
                available: 10.0,
            },
            ExchangeError::InvalidPrice("ETH".to_string()),
            ExchangeError::CatalogEmpty,
        ];
        let messages: std::collections::HashSet<String> =
            errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn test_insufficient_balance_points_at_amount_field() {
        let err = ExchangeError::InsufficientBalance {
            currency: "ETH".to_string(),
            requested: 11.0,
            available: 10.0,
        };
        assert_eq!(err.field(), FormField::Amount);
        assert_eq!(
            err.to_string(),
            "Amount must be less than or equal your number of token (11 > 10 ETH)"
        );
    }
}
