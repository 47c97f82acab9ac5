//! Form definitions backing paged list screens.

use thiserror::Error;
use validator::ValidationErrors;

pub mod paging;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid form encoding: {0}")]
    Decode(#[from] serde::de::value::Error),
}
