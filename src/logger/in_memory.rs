use crate::logger::AuditLogger;
use crate::models::AuditLogEntry;
use log::debug;

#[derive(Debug, Default)]
pub struct InMemoryAuditLogger {
    logs: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        match serde_json::to_string(&entry.event) {
            Ok(json) => debug!("Audit {}", json),
            Err(_) => debug!("Audit {:?}", entry.event),
        }
        self.logs.push(entry);
    }

    fn entries(&self) -> &[AuditLogEntry] {
        &self.logs
    }
}
