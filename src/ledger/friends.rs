use super::conversion::to_base;
use crate::models::{Balances, Group, MemberId};
use log::debug;

/// What each other member owes `self_id` (positive) or is owed by it
/// (negative), summed directly over every group.
///
/// Only expenses `self_id` paid for or was split into count. There is no
/// netting through third parties, and debts between two other members are
/// not visible here.
pub fn compute_friend_balances(groups: &[Group], self_id: MemberId) -> Balances {
    debug!(
        "Calculating friend balances for {} across {} groups",
        self_id,
        groups.len()
    );
    let mut balances = Balances::new();

    for expense in groups.iter().flat_map(|g| g.expenses.iter()) {
        let rate = expense.exchange_rate;
        if expense.payer_id == self_id {
            for split in expense.splits.iter().filter(|s| s.member_id != self_id) {
                balances.add(split.member_id, to_base(split.amount, rate));
            }
        } else if let Some(own) = expense.split_for(self_id) {
            balances.add(expense.payer_id, -to_base(own.amount, rate));
        }
    }

    debug!("Friend balances calculated: {:?}", balances);
    balances
}
