//! Drives the swap form: live previews while editing, and the submit
//! transaction that turns a valid request into a new ledger.

use crate::core::catalog::TokenCatalog;
use crate::core::conversion::{self, ConversionResult};
use crate::core::error::ExchangeError;
use crate::core::ledger::BalanceLedger;
use crate::core::request::{AmountInput, ExchangeRequest, SwapForm};
use crate::core::validator;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Previewing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    From(String),
    To(String),
    Amount(AmountInput),
    ClearAmount,
}

/// Converted value shown for the current form, or 0 when it cannot be computed.
pub fn preview_form(form: &SwapForm, catalog: &TokenCatalog) -> f64 {
    let price = |symbol: &Option<String>| {
        symbol
            .as_deref()
            .and_then(|s| catalog.get(s.trim()))
            .map(|token| token.price)
    };
    match (price(&form.from), price(&form.to)) {
        (Some(source_price), Some(destination_price)) => conversion::preview(
            form.amount.as_ref().and_then(AmountInput::value),
            source_price,
            destination_price,
        ),
        _ => 0.0,
    }
}

/// Runs validation, conversion and the ledger update for one request. The
/// input ledger is never touched; on success the caller swaps in the
/// returned one.
pub fn execute(
    request: &ExchangeRequest,
    catalog: &TokenCatalog,
    ledger: &BalanceLedger,
) -> Result<(BalanceLedger, ConversionResult), ExchangeError> {
    let swap = validator::validate(request, catalog, ledger)?;
    let result = conversion::convert(
        request.amount(),
        swap.source_price,
        swap.destination_price,
    )?;
    let next = ledger.transfer(
        request.source(),
        request.amount(),
        request.destination(),
        result.destination_amount,
    )?;
    Ok((next, result))
}

/// Owns the form state between edits. Ledgers are passed in and handed back
/// rather than held, so each submit is a single replace for the caller.
#[derive(Debug, Clone, Default)]
pub struct ExchangeController {
    state: ControllerState,
    form: SwapForm,
    preview: f64,
}

impl ExchangeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a preselected token pair and no amount.
    pub fn with_pair(from: &str, to: &str) -> Self {
        Self {
            form: SwapForm {
                from: Some(from.to_string()),
                to: Some(to.to_string()),
                amount: None,
            },
            ..Self::default()
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn form(&self) -> &SwapForm {
        &self.form
    }

    pub fn preview(&self) -> f64 {
        self.preview
    }

    /// Applies one field edit and returns the recomputed preview. Never fails
    /// and never touches a ledger. The controller stays `Previewing` while the
    /// form holds an amount and is `Idle` again once it is cleared.
    pub fn update(&mut self, change: FieldChange, catalog: &TokenCatalog) -> f64 {
        match change {
            FieldChange::From(symbol) => self.form.from = Some(symbol),
            FieldChange::To(symbol) => self.form.to = Some(symbol),
            FieldChange::Amount(amount) => self.form.amount = Some(amount),
            FieldChange::ClearAmount => self.form.amount = None,
        }
        self.state = if self.form.amount.is_some() {
            ControllerState::Previewing
        } else {
            ControllerState::Idle
        };
        self.preview = preview_form(&self.form, catalog);
        debug!(form = ?self.form, preview = self.preview, "Preview updated");
        self.preview
    }

    /// Submits the current form.
    pub fn submit(
        &mut self,
        catalog: &TokenCatalog,
        ledger: &BalanceLedger,
    ) -> Result<(BalanceLedger, ConversionResult), ExchangeError> {
        self.state = ControllerState::Submitting;
        let outcome = ExchangeRequest::parse(&self.form)
            .and_then(|request| execute(&request, catalog, ledger).map(|done| (request, done)));
        self.finish(outcome)
    }

    /// Submits an explicit request, bypassing the form fields.
    pub fn submit_request(
        &mut self,
        request: &ExchangeRequest,
        catalog: &TokenCatalog,
        ledger: &BalanceLedger,
    ) -> Result<(BalanceLedger, ConversionResult), ExchangeError> {
        self.state = ControllerState::Submitting;
        let outcome = execute(request, catalog, ledger).map(|done| (request.clone(), done));
        self.finish(outcome)
    }

    fn finish(
        &mut self,
        outcome: Result<(ExchangeRequest, (BalanceLedger, ConversionResult)), ExchangeError>,
    ) -> Result<(BalanceLedger, ConversionResult), ExchangeError> {
        self.state = ControllerState::Idle;
        match outcome {
            Ok((request, done)) => {
                info!(
                    from = request.source(),
                    to = request.destination(),
                    amount = request.amount(),
                    received = done.1.destination_amount,
                    "Swap committed"
                );
                self.form.amount = None;
                self.preview = 0.0;
                Ok(done)
            }
            Err(e) => {
                warn!(error = %e, field = ?e.field(), "Swap rejected");
                Err(e)
            }
        }
    }
}
