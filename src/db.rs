//! Database connection helpers.
//!
//! Connections are opened per call and never pooled: the target database can
//! change at any time through the settings API, so every call starts from the
//! profile currently on disk. Dropping the returned [`PgConnection`] closes it.

use std::sync::Arc;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::error;
use thiserror::Error;

use crate::config_store::ConfigStore;
use crate::domain::profile::ConnectionProfile;
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("invalid database configuration: {0}")]
    InvalidConfiguration(#[from] TypeConstraintError),

    #[error(transparent)]
    Refused(#[from] diesel::ConnectionError),

    #[error("failed to prepare connection: {0}")]
    Setup(#[from] diesel::result::Error),
}

#[derive(Debug, Clone, Copy, Default)]
/// Options that are applied each time a connection is opened.
pub struct ConnectionOptions {
    /// Maximum wait for the server to accept the connection.
    pub connect_timeout: Option<Duration>,
    /// Server-side limit for every statement run on the connection.
    pub statement_timeout: Option<Duration>,
}

impl ConnectionOptions {
    /// Builds options from second counts where `0` disables the timeout.
    pub fn from_secs(connect_timeout: u64, statement_timeout: u64) -> Self {
        let as_duration = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));
        Self {
            connect_timeout: as_duration(connect_timeout),
            statement_timeout: as_duration(statement_timeout),
        }
    }

    fn on_connect(&self, conn: &mut PgConnection) -> Result<(), diesel::result::Error> {
        if let Some(d) = self.statement_timeout {
            conn.batch_execute(&format!("SET statement_timeout = {};", d.as_millis()))?;
        }
        Ok(())
    }
}

/// Quotes a libpq keyword/value parameter.
fn quote_conninfo_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Renders the profile as a libpq keyword/value connection string.
pub fn connection_string(
    profile: &ConnectionProfile,
    options: &ConnectionOptions,
) -> Result<String, TypeConstraintError> {
    let port = profile.port()?;
    let mut conninfo = format!(
        "host={} port={} dbname={} user={} password={}",
        quote_conninfo_value(&profile.host),
        port,
        quote_conninfo_value(&profile.database),
        quote_conninfo_value(&profile.user),
        quote_conninfo_value(&profile.password),
    );
    if let Some(d) = options.connect_timeout {
        // libpq treats values below 2 seconds as 2.
        conninfo.push_str(&format!(" connect_timeout={}", d.as_secs().max(2)));
    }
    Ok(conninfo)
}

/// Opens a connection to the database described by `profile`.
pub fn establish_connection(
    profile: &ConnectionProfile,
    options: &ConnectionOptions,
) -> Result<PgConnection, ConnectError> {
    let conninfo = connection_string(profile, options)?;
    let mut conn = PgConnection::establish(&conninfo).map_err(|e| {
        error!("Database connection error for {}: {e}", profile.target());
        e
    })?;
    options.on_connect(&mut conn)?;
    Ok(conn)
}

/// Opens connections either from the persisted profile or from a candidate.
#[derive(Clone)]
pub struct ConnectionFactory {
    store: Arc<dyn ConfigStore>,
    options: ConnectionOptions,
}

impl ConnectionFactory {
    pub fn new(store: Arc<dyn ConfigStore>, options: ConnectionOptions) -> Self {
        Self { store, options }
    }

    /// Connects to the profile currently persisted in the config store.
    pub fn connect_active(&self) -> Result<PgConnection, ConnectError> {
        let profile = self.store.load();
        establish_connection(&profile, &self.options)
    }

    /// Connects to a candidate profile without persisting it.
    pub fn connect_probe(
        &self,
        candidate: &ConnectionProfile,
    ) -> Result<PgConnection, ConnectError> {
        establish_connection(candidate, &self.options)
    }
}
