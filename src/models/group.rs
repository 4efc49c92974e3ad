use super::currency::Currency;
use super::expense::{Expense, ExpenseId};
use super::member::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type GroupId = Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    pub base_currency: Currency,
    /// Roster in the order members joined the group.
    pub members: Vec<MemberId>,
    /// Newest first.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub date: DateTime<Utc>,
}

impl Group {
    pub fn new(
        title: impl Into<String>,
        base_currency: Currency,
        members: Vec<MemberId>,
        date: DateTime<Utc>,
    ) -> Self {
        Group {
            id: Uuid::new_v4(),
            title: title.into(),
            base_currency,
            members,
            expenses: Vec::new(),
            date,
        }
    }

    pub fn is_member(&self, member_id: MemberId) -> bool {
        self.members.contains(&member_id)
    }

    pub fn expense(&self, expense_id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == expense_id)
    }

    pub fn sort_expenses(&mut self) {
        self.expenses.sort_by(|a, b| b.date.cmp(&a.date));
    }
}
