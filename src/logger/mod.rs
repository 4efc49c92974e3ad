use crate::models::{AuditLogEntry, GroupId};

/// Sink for the entries `LedgerService` writes after each mutation.
pub trait AuditLogger {
    fn log(&mut self, entry: AuditLogEntry);

    fn entries(&self) -> &[AuditLogEntry];

    /// Entries touching one group, oldest first.
    fn for_group(&self, group_id: GroupId) -> Vec<&AuditLogEntry> {
        self.entries()
            .iter()
            .filter(|entry| entry.event.group_id() == Some(group_id))
            .collect()
    }
}

pub mod in_memory;
