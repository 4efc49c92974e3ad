use crate::constants::DEFAULT_SNAPSHOT_PATH;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use uuid::Uuid;

pub struct Config {
    pub log_level: String,
    pub self_member_id: Option<Uuid>,
    pub snapshot_path: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("log_level", &self.log_level)
            .field("self_member_id", &self.self_member_id)
            .field("snapshot_path", &self.snapshot_path)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            self_member_id: env::var("SELF_MEMBER_ID")
                .ok()
                .and_then(|v| Uuid::parse_str(v.trim()).ok()),
            snapshot_path: env::var("LEDGER_SNAPSHOT")
                .unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
