use serde::Deserialize;

use crate::domain::profile::{ConnectionProfile, DEFAULT_HOST};
use crate::domain::types::PortValue;
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize)]
/// Candidate connection profile submitted by an operator.
///
/// Every field is optional; see [`DbConfigForm::into_profile`] for the values
/// used when one is missing. `port` may be a number or a numeric string.
pub struct DbConfigForm {
    pub host: Option<String>,
    pub port: Option<PortValue>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DbConfigForm {
    /// Builds a profile, defaulting to localhost:5432 and empty credentials.
    pub fn into_profile(self) -> ConnectionProfile {
        ConnectionProfile {
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or_default(),
            database: self.database.unwrap_or_default(),
            user: self.user.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }

    /// Returns a profile whose port is an integer.
    ///
    /// The port is the only field checked; every other value is kept as
    /// submitted.
    pub fn into_normalized_profile(self) -> Result<ConnectionProfile, FormError> {
        self.into_profile()
            .normalized()
            .map_err(|err| FormError::InvalidPort(err.to_string()))
    }
}
