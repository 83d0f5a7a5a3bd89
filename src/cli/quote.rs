use super::ui;
use crate::core::{AmountInput, ExchangeController, FieldChange, TokenCatalog};

/// Feeds the three fields through the controller the way a form would and
/// returns the preview it ends up showing.
pub fn preview(
    controller: &mut ExchangeController,
    catalog: &TokenCatalog,
    from: &str,
    to: &str,
    amount: &str,
) -> f64 {
    controller.update(FieldChange::From(from.to_string()), catalog);
    controller.update(FieldChange::To(to.to_string()), catalog);
    controller.update(FieldChange::Amount(AmountInput::from(amount)), catalog)
}

pub fn render(from: &str, to: &str, amount: &str, value: f64) -> String {
    format!(
        "{} {from} {} {} {to}",
        amount.trim(),
        ui::style_text("≈", ui::StyleType::Subtle),
        ui::style_text(&value.to_string(), ui::StyleType::TotalValue),
    )
}

pub fn run(catalog: &TokenCatalog, from: &str, to: &str, amount: &str) {
    let mut controller = ExchangeController::new();
    let value = preview(&mut controller, catalog, from, to, amount);
    println!("{}", render(from, to, amount, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PriceRecord;

    #[test]
    fn test_quote_never_fails() {
        let catalog = TokenCatalog::load(&[
            PriceRecord::new("ETH", 1645.93),
            PriceRecord::new("USD", 1.0),
        ])
        .unwrap();
        let mut controller = ExchangeController::new();

        assert_eq!(preview(&mut controller, &catalog, "ETH", "USD", "2"), 3291.86);
        assert_eq!(preview(&mut controller, &catalog, "ETH", "USD", "two"), 0.0);
        assert_eq!(preview(&mut controller, &catalog, "ETH", "XYZ", "2"), 0.0);
        assert_eq!(
            console::strip_ansi_codes(&render("ETH", "USD", " 2 ", 3291.86)),
            "2 ETH ≈ 3291.86 USD"
        );
    }
}
