mod expense_tests;
mod member_tests;

use crate::models::*;
use crate::{InMemoryAuditLogger, InMemoryStorage, LedgerService};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub const EPS: f64 = 1e-9;

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
}

pub fn ids(n: usize) -> Vec<MemberId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

pub fn group_of(members: &[MemberId], base_currency: Currency) -> Group {
    Group::new("Trip", base_currency, members.to_vec(), day(1))
}

/// Pushes an expense straight into the group, bypassing validation.
pub fn push_expense(
    group: &mut Group,
    payer_id: MemberId,
    amount: f64,
    exchange_rate: f64,
    splits: &[(MemberId, f64)],
) {
    group.expenses.push(Expense {
        id: Uuid::new_v4(),
        group_id: group.id,
        payer_id,
        amount,
        currency: group.base_currency,
        exchange_rate,
        splits: splits
            .iter()
            .map(|&(member_id, amount)| SplitDetail::new(member_id, amount))
            .collect(),
        category: Category::Others,
        description: "test".to_string(),
        date: day(2),
    });
}

pub fn draft(payer_id: MemberId, amount: f64, currency: Currency, split: SplitInput) -> ExpenseDraft {
    ExpenseDraft {
        payer_id,
        amount,
        currency,
        split,
        category: Category::Food,
        description: "Dinner".to_string(),
        date: day(3),
    }
}

pub struct Fixture {
    pub storage: InMemoryStorage,
    pub audit_logger: InMemoryAuditLogger,
    pub self_id: MemberId,
}

impl Fixture {
    pub fn new() -> Self {
        let _ = env_logger::try_init();
        Fixture {
            storage: InMemoryStorage::new(),
            audit_logger: InMemoryAuditLogger::new(),
            self_id: Uuid::new_v4(),
        }
    }

    pub fn service(&mut self) -> LedgerService<'_> {
        LedgerService::new(&mut self.storage, &mut self.audit_logger, self.self_id)
    }
}
