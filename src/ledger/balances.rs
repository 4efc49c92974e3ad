use super::conversion::to_base;
use crate::models::{Balances, Group};
use log::debug;

/// Net balance of every member of `group` in its base currency.
///
/// The result is seeded with the roster in order, so members without any
/// expense report zero. Payers or splitters that are no longer on the roster
/// still contribute and are appended in the order expenses reference them.
/// No rounding happens here.
pub fn compute_balances(group: &Group) -> Balances {
    debug!("Calculating balances for group {}", group.id);
    let mut balances = Balances::with_members(&group.members);

    for expense in &group.expenses {
        let rate = expense.exchange_rate;
        balances.add(expense.payer_id, to_base(expense.amount, rate));
        for split in &expense.splits {
            balances.add(split.member_id, -to_base(split.amount, rate));
        }
    }

    debug!("Balances calculated: {:?}", balances);
    balances
}
