//! Form definitions backing the registry routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod citizens;
pub mod settings;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid citizen id")]
    InvalidCitizenId,

    #[error("invalid port: {0}")]
    InvalidPort(String),
}
