pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod receipt;
pub mod service;
pub mod snapshot;
pub mod storage;

pub use error::LedgerError;
pub use ledger::{compute_balances, compute_friend_balances, simplify_debts};
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::LedgerService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
