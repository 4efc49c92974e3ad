//! Pure balance and settlement computations over group snapshots.

pub mod balances;
pub mod conversion;
pub mod friends;
pub mod simplify;
pub mod split;

pub use balances::compute_balances;
pub use friends::compute_friend_balances;
pub use simplify::simplify_debts;
