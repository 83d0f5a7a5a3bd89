//! Line-driven session: several swaps against one in-memory ledger.

use super::{quote, swap, tokens, wallet};
use crate::core::{BalanceLedger, ExchangeController, TokenCatalog};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "Commands:
  swap <FROM> <TO> <AMOUNT>   swap tokens and update the wallet
  quote <FROM> <TO> <AMOUNT>  show the converted amount without swapping
  wallet                      show balances
  tokens                      show known tokens and prices
  help                        show this help
  quit                        end the session";

enum SessionCommand<'a> {
    Swap(&'a str, &'a str, &'a str),
    Quote(&'a str, &'a str, &'a str),
    Wallet,
    Tokens,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Option<SessionCommand<'_>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["swap", from, to, amount] => Some(SessionCommand::Swap(*from, *to, *amount)),
        ["quote", from, to, amount] => Some(SessionCommand::Quote(*from, *to, *amount)),
        ["wallet"] => Some(SessionCommand::Wallet),
        ["tokens"] => Some(SessionCommand::Tokens),
        ["help"] => Some(SessionCommand::Help),
        ["quit"] | ["exit"] => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// Runs commands from `input` until it ends or `quit` is read, and returns
/// the ledger as it stands at the end. Rejected swaps are reported and the
/// session carries on with the ledger unchanged.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    catalog: &TokenCatalog,
    mut ledger: BalanceLedger,
    mut controller: ExchangeController,
) -> Result<BalanceLedger> {
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line, "Session command");

        match parse_line(line) {
            Some(SessionCommand::Swap(from, to, amount)) => {
                match swap::apply(&mut controller, catalog, &ledger, from, to, amount) {
                    Ok((next, result)) => {
                        ledger = next;
                        writeln!(output, "{}", swap::render_success(from, to, amount, &result))?;
                    }
                    Err(e) => writeln!(output, "{}", swap::render_error(&e))?,
                }
            }
            Some(SessionCommand::Quote(from, to, amount)) => {
                let value = quote::preview(&mut controller, catalog, from, to, amount);
                writeln!(output, "{}", quote::render(from, to, amount, value))?;
            }
            Some(SessionCommand::Wallet) => writeln!(output, "{}", wallet::render(&ledger, catalog))?,
            Some(SessionCommand::Tokens) => writeln!(output, "{}", tokens::render(catalog))?,
            Some(SessionCommand::Help) => writeln!(output, "{HELP}")?,
            Some(SessionCommand::Quit) => break,
            None => writeln!(output, "Unrecognised command: {line} (try 'help')")?,
        }
    }

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PriceRecord;
    use std::io::Cursor;

    fn fixtures() -> (TokenCatalog, BalanceLedger) {
        let catalog = TokenCatalog::load(&[
            PriceRecord::new("ETH", 2048.0),
            PriceRecord::new("USD", 1.0),
        ])
        .unwrap();
        let ledger = BalanceLedger::seeded(&catalog, 10.0).unwrap();
        (catalog, ledger)
    }

    #[test]
    fn test_swaps_compound_within_a_session() {
        let (catalog, ledger) = fixtures();
        let input = Cursor::new("swap ETH USD 1\nswap USD ETH 2048\nswap ETH USD 4\n");
        let mut output = Vec::new();

        let ledger = run(input, &mut output, &catalog, ledger, ExchangeController::new()).unwrap();

        assert_eq!(ledger.get("ETH"), Some(6.0));
        assert_eq!(ledger.get("USD"), Some(8202.0));
        let text = console::strip_ansi_codes(&String::from_utf8(output).unwrap()).to_string();
        assert!(text.contains("Swapped 2048 USD for 1 ETH"));
    }

    #[test]
    fn test_rejected_swap_keeps_session_going() {
        let (catalog, ledger) = fixtures();
        let input = Cursor::new("swap ETH USD 11\nbogus\nquote ETH USD 1\nquit\nswap ETH USD 1\n");
        let mut output = Vec::new();

        let after = run(
            input,
            &mut output,
            &catalog,
            ledger.clone(),
            ExchangeController::new(),
        )
        .unwrap();

        assert_eq!(after, ledger);
        let text = console::strip_ansi_codes(&String::from_utf8(output).unwrap()).to_string();
        assert!(text.contains("Amount: Amount must be less than or equal your number of token"));
        assert!(text.contains("Unrecognised command: bogus"));
        assert!(text.contains("1 ETH ≈ 2048 USD"));
        assert!(!text.contains("Swapped"));
    }
}
