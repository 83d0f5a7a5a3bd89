use super::ui;
use crate::core::{
    AmountInput, BalanceLedger, ConversionResult, ExchangeController, ExchangeError, FieldChange,
    TokenCatalog,
};

/// Fills the form and submits it. The returned ledger replaces `ledger`.
pub fn apply(
    controller: &mut ExchangeController,
    catalog: &TokenCatalog,
    ledger: &BalanceLedger,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<(BalanceLedger, ConversionResult), ExchangeError> {
    controller.update(FieldChange::From(from.to_string()), catalog);
    controller.update(FieldChange::To(to.to_string()), catalog);
    controller.update(FieldChange::Amount(AmountInput::from(amount)), catalog);
    controller.submit(catalog, ledger)
}

pub fn render_success(from: &str, to: &str, amount: &str, result: &ConversionResult) -> String {
    format!(
        "Swapped {} {from} for {} {to}",
        amount.trim(),
        ui::style_text(
            &result.rounded_display_value.to_string(),
            ui::StyleType::TotalValue
        ),
    )
}

pub fn render_error(err: &ExchangeError) -> String {
    format!(
        "{}: {}",
        ui::style_text(ui::field_label(err.field()), ui::StyleType::TotalLabel),
        ui::style_text(&err.to_string(), ui::StyleType::Error)
    )
}

/// One-shot swap against a freshly seeded ledger. Prints the wallet after a
/// successful swap and fails with the validation error otherwise.
pub fn run(
    catalog: &TokenCatalog,
    ledger: &BalanceLedger,
    from: &str,
    to: &str,
    amount: &str,
) -> anyhow::Result<BalanceLedger> {
    let mut controller = ExchangeController::new();
    match apply(&mut controller, catalog, ledger, from, to, amount) {
        Ok((next, result)) => {
            println!("{}\n", render_success(from, to, amount, &result));
            println!("{}", super::wallet::render(&next, catalog));
            Ok(next)
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormField, PriceRecord};

    fn fixtures() -> (TokenCatalog, BalanceLedger) {
        let catalog = TokenCatalog::load(&[
            PriceRecord::new("ETH", 2000.0),
            PriceRecord::new("USD", 1.0),
        ])
        .unwrap();
        let ledger = BalanceLedger::from_balances([("ETH", 10.0), ("USD", 0.0)]).unwrap();
        (catalog, ledger)
    }

    #[test]
    fn test_apply_swaps_through_the_form() {
        let (catalog, ledger) = fixtures();
        let mut controller = ExchangeController::new();

        let (next, result) = apply(&mut controller, &catalog, &ledger, "ETH", "USD", "1").unwrap();
        assert_eq!(result.rounded_display_value, 2000.0);
        assert_eq!(next.get("ETH"), Some(9.0));
        assert_eq!(next.get("USD"), Some(2000.0));
        assert_eq!(
            console::strip_ansi_codes(&render_success("ETH", "USD", "1", &result)),
            "Swapped 1 ETH for 2000 USD"
        );
    }

    #[test]
    fn test_errors_name_their_field() {
        let (catalog, ledger) = fixtures();
        let mut controller = ExchangeController::new();

        let err = apply(&mut controller, &catalog, &ledger, "ETH", "USD", "").unwrap_err();
        assert_eq!(err, ExchangeError::MissingAmount);
        assert_eq!(
            console::strip_ansi_codes(&render_error(&err)),
            "Amount: Amount is required"
        );

        let err = apply(&mut controller, &catalog, &ledger, "ETH", "USD", "11").unwrap_err();
        assert_eq!(err.field(), FormField::Amount);
        assert!(matches!(err, ExchangeError::InsufficientBalance { .. }));
    }

    #[test]
    fn test_run_surfaces_the_typed_error() {
        let (catalog, ledger) = fixtures();
        let err = run(&catalog, &ledger, "ETH", "BTC", "1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExchangeError>(),
            Some(&ExchangeError::UnknownToken {
                currency: "BTC".to_string(),
                field: FormField::Destination,
            })
        );
    }
}
