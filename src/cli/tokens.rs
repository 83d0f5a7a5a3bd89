use super::ui;
use crate::core::TokenCatalog;
use comfy_table::Cell;

pub fn render(catalog: &TokenCatalog) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Price"),
        ui::header_cell("Updated"),
        ui::header_cell("Icon"),
    ]);

    for token in catalog.tokens() {
        table.add_row(vec![
            Cell::new(&token.currency),
            Cell::new(&token.metadata.display_name),
            ui::amount_cell(token.price),
            ui::format_optional_cell(token.metadata.updated_at, |d| {
                d.format("%Y-%m-%d %H:%M").to_string()
            }),
            Cell::new(token.icon_url()),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Tokens", ui::StyleType::Title),
        table
    )
}

pub fn run(catalog: &TokenCatalog) {
    println!("{}", render(catalog));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PriceRecord;

    #[test]
    fn test_render_lists_each_token_once() {
        let catalog = TokenCatalog::load(&[
            PriceRecord::new("STATOM", 10.0),
            PriceRecord::new("USD", 1.0),
            PriceRecord::new("STATOM", 99.0),
        ])
        .unwrap();

        let output = console::strip_ansi_codes(&render(&catalog)).to_string();
        assert!(output.contains("stATOM"));
        assert!(output.contains("10.0000"));
        assert!(!output.contains("99.0000"));
    }
}
