use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Read projection of a row in the citizen table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Citizen {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub arrested: bool,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
}

/// Narrows a citizen search by arrest status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Arrested,
    Free,
}

impl StatusFilter {
    /// Lenient conversion used for query strings: unknown values mean `All`.
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(StatusFilter::All)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "arrested" => Ok(StatusFilter::Arrested),
            "free" => Ok(StatusFilter::Free),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

/// Optional free text plus a status filter, combined conjunctively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub text: Option<String>,
    pub status: StatusFilter,
}

impl SearchCriteria {
    pub fn new(text: Option<String>, status: StatusFilter) -> Self {
        Self { text, status }
    }

    /// Search text with surrounding whitespace removed, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Requested arrest flag paired with the value read back after the update.
///
/// `verified_value` is `None` when no row matched the id, which callers treat
/// as a no-op update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrestToggle {
    pub arrested_value: bool,
    pub verified_value: Option<bool>,
}

impl ArrestToggle {
    /// True when the stored flag matches the requested one.
    pub fn is_verified(&self) -> bool {
        self.verified_value == Some(self.arrested_value)
    }
}
