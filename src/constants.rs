/// Balances within this distance of zero count as settled.
pub const BALANCE_EPSILON: f64 = 0.01;

/// A split entry this close to `amount / n` still reads as an equal split.
pub const EQUAL_SPLIT_TOLERANCE: f64 = 0.1;

/// Friends owing or owed more than this cannot be removed from the roster.
pub const FRIEND_BALANCE_TOLERANCE: f64 = 0.1;

pub const SCANNED_RECEIPT_DESCRIPTION: &str = "Scanned Receipt";

pub const DEFAULT_SNAPSHOT_PATH: &str = "ledger.json";
