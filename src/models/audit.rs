use super::currency::Currency;
use super::expense::ExpenseId;
use super::group::GroupId;
use super::member::MemberId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A ledger mutation, with the data needed to read the audit trail without
/// going back to the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    MemberAdded {
        member_id: MemberId,
        name: String,
    },
    MemberRenamed {
        member_id: MemberId,
        name: String,
    },
    MemberRemoved {
        member_id: MemberId,
    },
    GroupCreated {
        group_id: GroupId,
        title: String,
        base_currency: Currency,
        members: usize,
    },
    GroupMemberAdded {
        group_id: GroupId,
        member_id: MemberId,
    },
    ExpenseAdded {
        group_id: GroupId,
        expense_id: ExpenseId,
        amount: f64,
        currency: Currency,
        exchange_rate: f64,
        /// Non-zero when custom splits do not cover the amount.
        unallocated: f64,
    },
    ExpenseUpdated {
        group_id: GroupId,
        expense_id: ExpenseId,
        amount: f64,
        currency: Currency,
        exchange_rate: f64,
        unallocated: f64,
    },
    ExpenseDeleted {
        group_id: GroupId,
        expense_id: ExpenseId,
    },
}

impl AuditEvent {
    /// The group a mutation touched, if any.
    pub fn group_id(&self) -> Option<GroupId> {
        match self {
            AuditEvent::GroupCreated { group_id, .. }
            | AuditEvent::GroupMemberAdded { group_id, .. }
            | AuditEvent::ExpenseAdded { group_id, .. }
            | AuditEvent::ExpenseUpdated { group_id, .. }
            | AuditEvent::ExpenseDeleted { group_id, .. } => Some(*group_id),
            AuditEvent::MemberAdded { .. }
            | AuditEvent::MemberRenamed { .. }
            | AuditEvent::MemberRemoved { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    /// The local user; every mutation is made on their device.
    pub actor_id: MemberId,
    #[serde(flatten)]
    pub event: AuditEvent,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn new(actor_id: MemberId, event: AuditEvent, created_at: DateTime<Utc>) -> Self {
        AuditLogEntry {
            id: Uuid::new_v4(),
            actor_id,
            event,
            created_at,
        }
    }
}
