use super::currency::Currency;
use super::member::MemberId;
use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

pub type ExpenseId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Hotel,
    Entertainment,
    Shopping,
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Hotel,
        Category::Entertainment,
        Category::Shopping,
        Category::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Hotel => "Hotel",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Others => "Others",
        }
    }

    /// Unknown labels land in `Others`.
    pub fn from_label(label: &str) -> Category {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .unwrap_or(Category::Others)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    Equal,
    Custom,
}

/// Amount one member owes toward an expense, in the expense's own currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitDetail {
    pub member_id: MemberId,
    pub amount: f64,
}

impl SplitDetail {
    pub fn new(member_id: MemberId, amount: f64) -> Self {
        SplitDetail { member_id, amount }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub group_id: Uuid,
    pub payer_id: MemberId,
    pub amount: f64,
    pub currency: Currency,
    /// Units of the group's base currency per unit of `currency`, frozen
    /// when the expense was recorded.
    pub exchange_rate: f64,
    pub splits: Vec<SplitDetail>,
    pub category: Category,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn amount_in_base(&self) -> f64 {
        crate::ledger::conversion::to_base(self.amount, self.exchange_rate)
    }

    pub fn split_for(&self, member_id: MemberId) -> Option<&SplitDetail> {
        self.splits.iter().find(|s| s.member_id == member_id)
    }

    /// Part of the amount no split entry accounts for (negative when the
    /// entries over-allocate).
    pub fn unallocated_amount(&self) -> f64 {
        crate::ledger::split::split_difference(self.amount, &self.splits)
    }

    /// Checks the amount, the frozen rate and the split entries, asking
    /// `check_member` about the payer and every splitter.
    pub fn validate<F>(&self, mut check_member: F) -> Result<(), LedgerError>
    where
        F: FnMut(MemberId) -> Result<(), LedgerError>,
    {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(self.amount));
        }
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(LedgerError::InvalidExchangeRate(self.exchange_rate));
        }
        check_member(self.payer_id)?;
        if self.splits.is_empty() {
            return Err(LedgerError::EmptySplit);
        }

        let mut seen = HashSet::new();
        for split in &self.splits {
            check_member(split.member_id)?;
            if !seen.insert(split.member_id) {
                return Err(LedgerError::DuplicateSplitMember(split.member_id.to_string()));
            }
            if !split.amount.is_finite() || split.amount < 0.0 {
                return Err(LedgerError::invalid_input(
                    "splits",
                    "Invalid split amount",
                    format!("{} for member {}", split.amount, split.member_id),
                ));
            }
        }
        Ok(())
    }
}

/// How a new or edited expense should be divided.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitInput {
    /// `amount / n` for each listed member.
    Equal(Vec<MemberId>),
    /// Amounts as entered; they are not required to add up to the total.
    Custom(Vec<SplitDetail>),
}

/// Expense as entered by the user, before validation against its group.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub payer_id: MemberId,
    pub amount: f64,
    pub currency: Currency,
    pub split: SplitInput,
    pub category: Category,
    pub description: String,
    pub date: DateTime<Utc>,
}
