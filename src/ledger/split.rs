use super::conversion::round_to_cents;
use crate::constants::EQUAL_SPLIT_TOLERANCE;
use crate::error::LedgerError;
use crate::models::{Expense, MemberId, SplitDetail, SplitMode};

/// One unrounded `amount / n` entry per member.
pub fn equal_split(amount: f64, member_ids: &[MemberId]) -> Result<Vec<SplitDetail>, LedgerError> {
    if member_ids.is_empty() {
        return Err(LedgerError::EmptySplit);
    }
    let share = amount / member_ids.len() as f64;
    Ok(member_ids
        .iter()
        .map(|&member_id| SplitDetail::new(member_id, share))
        .collect())
}

/// Per-person share shown while an equal split is being entered.
pub fn equal_share_preview(amount: f64, members: usize) -> f64 {
    if amount <= 0.0 || members == 0 {
        return 0.0;
    }
    round_to_cents(amount / members as f64)
}

pub fn split_difference(amount: f64, splits: &[SplitDetail]) -> f64 {
    amount - splits.iter().map(|s| s.amount).sum::<f64>()
}

pub fn detect_split_mode(expense: &Expense) -> SplitMode {
    if expense.splits.is_empty() {
        return SplitMode::Custom;
    }
    let share = expense.amount / expense.splits.len() as f64;
    if expense
        .splits
        .iter()
        .all(|s| (s.amount - share).abs() < EQUAL_SPLIT_TOLERANCE)
    {
        SplitMode::Equal
    } else {
        SplitMode::Custom
    }
}
