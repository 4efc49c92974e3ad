use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Member with given ID is not on the roster
    #[error("Member {0} not found")]
    MemberNotFound(String),

    /// Member with given ID is already on the roster
    #[error("Member {0} already exists")]
    MemberAlreadyExists(String),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// Expense with given ID not found in the group
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Member is referenced by an expense but is not in the group roster
    #[error("Member {0} is not a member of group {1}")]
    NotGroupMember(String, String),

    /// Member is already part of the group roster
    #[error("Member {0} is already a member of group {1}")]
    AlreadyGroupMember(String, String),

    /// Amount is zero, negative or not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Exchange rate is zero, negative or not a finite number
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(f64),

    /// Expense has no split entries
    #[error("Expense must be split among at least one member")]
    EmptySplit,

    /// The same member appears twice in one expense's split
    #[error("Member {0} appears more than once in the split")]
    DuplicateSplitMember(String),

    /// Currency code is not one of the supported set
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Member still owes or is owed money somewhere
    #[error("Member {0} has an outstanding balance of {1:.2}")]
    OutstandingBalance(String, f64),

    /// The local user cannot be removed from their own ledger
    #[error("Cannot remove the local user")]
    CannotRemoveSelf,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Snapshot file could not be read or parsed
    #[error("Snapshot error: {0}")]
    SnapshotError(String),

    /// External receipt scanner failed
    #[error("Receipt scan failed: {0}")]
    ReceiptScanError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl LedgerError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        LedgerError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}
