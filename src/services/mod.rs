//! Request-level orchestration of paging state.

use thiserror::Error;

use crate::errors::PagingError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod paging;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("paging error: {0}")]
    Paging(#[from] PagingError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("form error: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
