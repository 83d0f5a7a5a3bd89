//! Swap core: catalog, ledger, conversion, validation and the controller
//! tying them together. Nothing in here performs I/O.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod conversion;
pub mod error;
pub mod feed;
pub mod ledger;
pub mod log;
pub mod request;
pub mod validator;

// Re-export main types for cleaner imports
pub use catalog::{Token, TokenCatalog};
pub use controller::{ControllerState, ExchangeController, FieldChange};
pub use conversion::ConversionResult;
pub use error::{ExchangeError, FormField};
pub use feed::{PriceFeedProvider, PriceRecord};
pub use ledger::{BalanceEntry, BalanceLedger};
pub use request::{AmountInput, ExchangeRequest, SwapForm};
