//! Greedy creditor/debtor matching.
//!
//! Creditors and debtors are matched with two cursors in the order the
//! balances list them; neither side is sorted, so the same balances always
//! produce the same transfers. For `n` non-zero participants this emits at
//! most `n - 1` transfers. It is not a minimum-cash-flow solver: when a
//! different pairing would need fewer transfers, this does not look for it.
//!
//! Whatever is still unmatched when one side runs out is reported as
//! `leftover`, but only when the balances themselves are off by more than
//! ε. Balances within ε of zero are skipped on both sides, so a zero-sum
//! input can leave a small unmatched remainder that is just that skipped
//! dust; it is logged and dropped.

use crate::constants::BALANCE_EPSILON;
use crate::models::{Balances, MemberId, Outstanding, Settlement, SettlementPlan};
use log::{debug, warn};

pub fn simplify_debts(balances: &Balances) -> SettlementPlan {
    debug!("Simplifying debts with balances: {:?}", balances);
    let mut creditors: Vec<(MemberId, f64)> = Vec::new();
    let mut debtors: Vec<(MemberId, f64)> = Vec::new();

    for (member_id, balance) in balances.iter() {
        if balance > BALANCE_EPSILON {
            creditors.push((member_id, balance));
        } else if balance < -BALANCE_EPSILON {
            debtors.push((member_id, -balance));
        }
    }

    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let (debtor_id, debt_amt) = debtors[i];
        let (creditor_id, credit_amt) = creditors[j];

        let settled_amt = debt_amt.min(credit_amt);
        settlements.push(Settlement {
            from: debtor_id,
            to: creditor_id,
            amount: settled_amt,
        });

        debtors[i].1 = debt_amt - settled_amt;
        creditors[j].1 = credit_amt - settled_amt;

        if debtors[i].1 < BALANCE_EPSILON {
            i += 1;
        }
        if creditors[j].1 < BALANCE_EPSILON {
            j += 1;
        }
    }

    let unmatched: Vec<Outstanding> = creditors[j..]
        .iter()
        .map(|&(member_id, amount)| Outstanding { member_id, amount })
        .chain(debtors[i..].iter().map(|&(member_id, amount)| Outstanding {
            member_id,
            amount: -amount,
        }))
        .collect();

    let total = balances.total();
    let leftover = if unmatched.is_empty() || total.abs() <= BALANCE_EPSILON {
        if !unmatched.is_empty() {
            debug!("Dropping sub-epsilon remainder {:?} (total {:e})", unmatched, total);
        }
        Vec::new()
    } else {
        warn!(
            "Balances do not sum to zero (total {:.2}); {} member(s) left unsettled: {:?}",
            total,
            unmatched.len(),
            unmatched
        );
        unmatched
    };

    debug!("Simplified debts: {:?}", settlements);
    SettlementPlan {
        settlements,
        leftover,
    }
}
