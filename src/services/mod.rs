//! Framework-free operations invoked by the HTTP routes.

use thiserror::Error;

use crate::config_store::ConfigStoreError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod citizens;
pub mod settings;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    ConfigWrite(#[from] ConfigStoreError),

    #[error("{0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
