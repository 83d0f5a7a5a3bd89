pub mod quote;
pub mod session;
pub mod setup;
pub mod swap;
pub mod tokens;
pub mod ui;
pub mod wallet;
