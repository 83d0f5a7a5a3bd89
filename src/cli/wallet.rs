use super::ui;
use crate::core::{BalanceLedger, TokenCatalog, conversion::round_display};
use comfy_table::Cell;

/// Balances in ledger order, each priced by its own symbol.
pub fn render(ledger: &BalanceLedger, catalog: &TokenCatalog) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Balance"),
        ui::header_cell("Price"),
        ui::header_cell("Value"),
    ]);

    let mut total = 0.0;
    for entry in ledger.entries() {
        let price = catalog
            .get(&entry.currency)
            .filter(|t| t.has_usable_price())
            .map(|t| t.price);
        let value = price.map(|p| entry.amount * p);
        total += value.unwrap_or(0.0);

        table.add_row(vec![
            Cell::new(&entry.currency),
            ui::amount_cell(round_display(entry.amount)),
            ui::format_optional_cell(price, |p| format!("${:.4}", round_display(p))),
            ui::format_optional_cell(value, |v| format!("${:.4}", round_display(v))),
        ]);
    }

    format!(
        "{}\n\n{}\n\n{}: {}",
        ui::style_text("Wallet", ui::StyleType::Title),
        table,
        ui::style_text("Total Value", ui::StyleType::TotalLabel),
        ui::style_text(
            &format!("${:.4}", round_display(total)),
            ui::StyleType::TotalValue
        )
    )
}

pub fn run(ledger: &BalanceLedger, catalog: &TokenCatalog) {
    println!("{}", render(ledger, catalog));
}
