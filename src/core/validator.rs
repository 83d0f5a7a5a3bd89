//! Checks a swap against the catalog and the ledger before anything moves.
//!
//! Rules run in a fixed order and the first failure is returned:
//!
//! 1. source selected, 2. destination selected, 3. amount present and positive
//!    (all three in [`ExchangeRequest::parse`]),
//! 4. source held in the ledger,
//! 5. amount within the source balance,
//! 6. source and destination priced in the catalog,
//! 7. destination held in the ledger.
//!
//! Swapping a token for itself is allowed and converts 1:1.

use crate::core::catalog::{Token, TokenCatalog};
use crate::core::error::{ExchangeError, FormField};
use crate::core::ledger::BalanceLedger;
use crate::core::request::{ExchangeRequest, SwapForm};

/// A request that passed validation, with the prices it will convert at.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSwap {
    pub request: ExchangeRequest,
    pub source_price: f64,
    pub destination_price: f64,
}

fn priced<'a>(
    catalog: &'a TokenCatalog,
    currency: &str,
    field: FormField,
) -> Result<&'a Token, ExchangeError> {
    let token = catalog
        .get(currency)
        .ok_or_else(|| ExchangeError::unknown_token(currency, field))?;
    if !token.has_usable_price() {
        return Err(ExchangeError::InvalidPrice(format!(
            "{currency} price {}",
            token.price
        )));
    }
    Ok(token)
}

pub fn validate(
    request: &ExchangeRequest,
    catalog: &TokenCatalog,
    ledger: &BalanceLedger,
) -> Result<ValidatedSwap, ExchangeError> {
    let source = request.source();
    let available = ledger
        .get(source)
        .ok_or_else(|| ExchangeError::unknown_token(source, FormField::Source))?;

    if request.amount() > available {
        return Err(ExchangeError::InsufficientBalance {
            currency: source.to_string(),
            requested: request.amount(),
            available,
        });
    }

    let source_token = priced(catalog, source, FormField::Source)?;
    let destination_token = priced(catalog, request.destination(), FormField::Destination)?;

    if !ledger.contains(request.destination()) {
        return Err(ExchangeError::unknown_token(
            request.destination(),
            FormField::Destination,
        ));
    }

    Ok(ValidatedSwap {
        request: request.clone(),
        source_price: source_token.price,
        destination_price: destination_token.price,
    })
}

/// Parses the form and validates the resulting request.
pub fn validate_form(
    form: &SwapForm,
    catalog: &TokenCatalog,
    ledger: &BalanceLedger,
) -> Result<ValidatedSwap, ExchangeError> {
    let request = ExchangeRequest::parse(form)?;
    validate(&request, catalog, ledger)
}
