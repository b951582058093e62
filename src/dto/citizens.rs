//! DTOs exposed by the citizen endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::citizen::{ArrestToggle, Citizen, SearchCriteria, StatusFilter};

/// Query parameters accepted by `/api/citizens`.
#[derive(Debug, Default, Deserialize)]
pub struct CitizensQuery {
    /// Optional free-form search string.
    pub search: Option<String>,
    /// `all`, `arrested` or `free`; anything else means `all`.
    pub status: Option<String>,
}

impl From<CitizensQuery> for SearchCriteria {
    fn from(query: CitizensQuery) -> Self {
        let status = StatusFilter::from_param(query.status.as_deref());
        SearchCriteria::new(query.search, status)
    }
}

/// Result payload returned by [`crate::services::citizens::list_citizens`].
///
/// On failure the list is empty, the count is zero and `error` describes what
/// went wrong.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct CitizenListing {
    pub citizens: Vec<Citizen>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CitizenListing {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Response body of the arrested toggle.
#[derive(Debug, Serialize, PartialEq)]
pub struct SetArrestedResponse {
    pub success: bool,
    #[serde(rename = "arrested", skip_serializing_if = "Option::is_none")]
    pub arrested_value: Option<bool>,
    #[serde(rename = "verified", skip_serializing_if = "Option::is_none")]
    pub verified_value: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SetArrestedResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            arrested_value: None,
            verified_value: None,
            error: Some(error.into()),
        }
    }
}

impl From<ArrestToggle> for SetArrestedResponse {
    fn from(toggle: ArrestToggle) -> Self {
        Self {
            success: true,
            arrested_value: Some(toggle.arrested_value),
            verified_value: Some(toggle.verified_value),
            error: None,
        }
    }
}
