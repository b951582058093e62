#![allow(dead_code)]

use std::env;

use citizen_registry::config_store::{ConfigStore, FileConfigStore};
use citizen_registry::domain::profile::ConnectionProfile;
use citizen_registry::domain::types::PortValue;
use citizen_registry::models::config::ServerConfig;
use tempfile::TempDir;

/// Isolated settings whose profile file lives in a temporary directory.
pub struct TestEnv {
    _dir: TempDir,
    pub config: ServerConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 0,
            templates_dir: "templates/**/*".to_string(),
            db_config_path: dir
                .path()
                .join("db_config.json")
                .to_string_lossy()
                .into_owned(),
            connect_timeout_secs: 2,
            statement_timeout_secs: 5,
        };
        Self { _dir: dir, config }
    }

    pub fn store(&self) -> FileConfigStore {
        FileConfigStore::new(&self.config.db_config_path)
    }

    /// Persists a profile pointing at a local port nobody listens on.
    pub fn point_at_closed_port(&self) {
        self.store()
            .save(&unreachable_profile())
            .expect("should write profile");
    }
}

pub fn unreachable_profile() -> ConnectionProfile {
    ConnectionProfile {
        host: "127.0.0.1".to_string(),
        port: PortValue::Number(1),
        database: "cad".to_string(),
        user: "ops".to_string(),
        password: "x".to_string(),
    }
}

/// Profile of a disposable PostgreSQL database from `TEST_PG_*` variables.
///
/// Returns `None` when `TEST_PG_HOST` is unset so live tests can be skipped.
pub fn live_profile() -> Option<ConnectionProfile> {
    let host = env::var("TEST_PG_HOST").ok()?;
    Some(ConnectionProfile {
        host,
        port: PortValue::Text(env::var("TEST_PG_PORT").unwrap_or_else(|_| "5432".into())),
        database: env::var("TEST_PG_DATABASE").unwrap_or_else(|_| "postgres".into()),
        user: env::var("TEST_PG_USER").unwrap_or_else(|_| "postgres".into()),
        password: env::var("TEST_PG_PASSWORD").unwrap_or_default(),
    })
}
