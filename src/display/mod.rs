//! Terminal display formatting

pub mod balances;
pub mod history;

pub use balances::format_balances;
pub use history::format_history;
