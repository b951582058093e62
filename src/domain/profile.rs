//! Connection profile describing the one database the service talks to.

use serde::{Deserialize, Serialize};

use crate::domain::types::{Port, PortValue, TypeConstraintError};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_DATABASE: &str = "snaily-cadv41";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "admin1";

/// Token shown instead of a stored, non-empty password.
pub const PASSWORD_MASK: &str = "••••••••";

/// Endpoint and credentials of the target PostgreSQL database.
///
/// The profile is always replaced as a whole. Its serialized form is the
/// persisted configuration record, so the field names are part of the file
/// format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConnectionProfile {
    pub host: String,
    pub port: PortValue,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: PortValue::default(),
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ConnectionProfile {
    /// Coerces the stored port into a validated [`Port`].
    pub fn port(&self) -> Result<Port, TypeConstraintError> {
        self.port.to_port()
    }

    /// Returns a copy whose port is stored as a validated integer.
    pub fn normalized(self) -> Result<Self, TypeConstraintError> {
        let port = self.port()?;
        Ok(Self {
            port: port.into(),
            ..self
        })
    }

    /// Builds the view that may leave the process.
    #[must_use]
    pub fn redacted(&self) -> RedactedProfile {
        RedactedProfile {
            host: self.host.clone(),
            port: self.port.clone(),
            database: self.database.clone(),
            user: self.user.clone(),
            password: if self.password.is_empty() {
                String::new()
            } else {
                PASSWORD_MASK.to_string()
            },
        }
    }

    /// Short `host:port/database` label for log lines.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

/// Profile with the secret replaced, safe to hand to external callers.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RedactedProfile {
    pub host: String,
    pub port: PortValue,
    pub database: String,
    pub user: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_targets_local_postgres() {
        let profile = ConnectionProfile::default();

        assert_eq!(profile.host, "localhost");
        assert_eq!(profile.port().unwrap().get(), 5432);
        assert_eq!(profile.target(), "localhost:5432/snaily-cadv41");
    }

    #[test]
    fn redaction_masks_non_empty_password() {
        let profile = ConnectionProfile {
            password: "hunter2".to_string(),
            ..ConnectionProfile::default()
        };

        let view = profile.redacted();

        assert_eq!(view.password, PASSWORD_MASK);
        assert_ne!(view.password, "hunter2");
        assert_eq!(view.host, profile.host);
    }

    #[test]
    fn redaction_keeps_empty_password_empty() {
        let profile = ConnectionProfile {
            password: String::new(),
            ..ConnectionProfile::default()
        };

        assert_eq!(profile.redacted().password, "");
    }

    #[test]
    fn normalization_turns_text_port_into_number() {
        let profile = ConnectionProfile {
            port: PortValue::Text("6543".to_string()),
            ..ConnectionProfile::default()
        };

        let normalized = profile.normalized().unwrap();

        assert_eq!(normalized.port, PortValue::Number(6543));
    }

    #[test]
    fn normalization_rejects_garbage_port() {
        let profile = ConnectionProfile {
            port: PortValue::Text("abc".to_string()),
            ..ConnectionProfile::default()
        };

        assert!(profile.normalized().is_err());
    }
}
