use super::member::MemberId;
use crate::ledger::conversion::round_to_cents;
use serde::{Deserialize, Serialize};

/// A transfer from `from` (debtor) to `to` (creditor) in the group's base
/// currency. `amount` is always strictly positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: f64,
}

impl Settlement {
    pub fn rounded_amount(&self) -> f64 {
        round_to_cents(self.amount)
    }
}

/// Balance still held by a member once matching stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outstanding {
    pub member_id: MemberId,
    /// Positive: still owed. Negative: still owes.
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    pub settlements: Vec<Settlement>,
    pub leftover: Vec<Outstanding>,
}

impl SettlementPlan {
    /// False when the input balances did not sum to zero and some members
    /// were left unsettled.
    pub fn is_balanced(&self) -> bool {
        self.leftover.is_empty()
    }

    pub fn total_transferred(&self) -> f64 {
        self.settlements.iter().map(|s| s.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }
}
