use crate::error::LedgerError;
use crate::models::{Group, Member, MemberId};
use crate::storage::in_memory::InMemoryStorage;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Everything the binary needs to print a ledger: the local user, the
/// friend roster and every group with its expenses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub self_id: MemberId,
    pub members: Vec<Member>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl LedgerSnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        info!("Loading ledger snapshot from {}", path.display());
        let raw = fs::read_to_string(path)
            .map_err(|e| LedgerError::SnapshotError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        let snapshot: LedgerSnapshot = serde_json::from_str(raw)
            .map_err(|e| LedgerError::SnapshotError(format!("Invalid snapshot: {}", e)))?;
        debug!(
            "Snapshot holds {} members and {} groups",
            snapshot.members.len(),
            snapshot.groups.len()
        );
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rejects rosters with repeated ids, groups naming unknown members,
    /// and expenses that `LedgerService` would not have accepted. Payers and
    /// splitters only need to be on the roster, since a member can leave a
    /// group after its expenses were recorded.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let mut roster = HashSet::new();
        for member in &self.members {
            if !roster.insert(member.id) {
                return Err(LedgerError::SnapshotError(format!(
                    "Member {} is listed twice",
                    member.id
                )));
            }
        }

        for group in &self.groups {
            if let Some(unknown) = group.members.iter().find(|id| !roster.contains(*id)) {
                return Err(LedgerError::SnapshotError(format!(
                    "Group '{}' lists unknown member {}",
                    group.title, unknown
                )));
            }
            for expense in &group.expenses {
                let checked = if expense.group_id != group.id {
                    Err(LedgerError::invalid_input(
                        "group_id",
                        "Expense filed under another group",
                        format!("expense belongs to {}", expense.group_id),
                    ))
                } else {
                    expense.validate(|member_id| {
                        if roster.contains(&member_id) {
                            Ok(())
                        } else {
                            Err(LedgerError::MemberNotFound(member_id.to_string()))
                        }
                    })
                };
                if let Err(e) = checked {
                    warn!("Rejected snapshot expense {}: {}", expense.id, e);
                    return Err(LedgerError::SnapshotError(format!(
                        "Expense {} in group '{}': {}",
                        expense.id, group.title, e
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn member_name(&self, member_id: MemberId) -> String {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| member_id.to_string())
    }

    pub fn into_storage(self) -> InMemoryStorage {
        InMemoryStorage::from_parts(self.members, self.groups)
    }
}
