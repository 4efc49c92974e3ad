pub mod audit;
pub mod balance;
pub mod currency;
pub mod expense;
pub mod group;
pub mod member;
pub mod settlement;

pub use audit::{AuditEvent, AuditLogEntry};
pub use balance::Balances;
pub use currency::{Currency, RateTable};
pub use expense::{Category, Expense, ExpenseDraft, ExpenseId, SplitDetail, SplitInput, SplitMode};
pub use group::{Group, GroupId};
pub use member::{Member, MemberId};
pub use settlement::{Outstanding, Settlement, SettlementPlan};
