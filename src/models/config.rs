//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::config_store::DEFAULT_CONFIG_PATH;
use crate::db::ConnectionOptions;

fn default_db_config_path() -> String {
    DEFAULT_CONFIG_PATH.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_statement_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Process settings. The database target is not among them: it lives in the
/// runtime-editable file at `db_config_path`.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_db_config_path")]
    pub db_config_path: String,
    /// Seconds to wait for a connection; `0` waits indefinitely.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds any single statement may run; `0` means no limit.
    #[serde(default = "default_statement_timeout_secs")]
    pub statement_timeout_secs: u64,
}

impl ServerConfig {
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions::from_secs(self.connect_timeout_secs, self.statement_timeout_secs)
    }
}
