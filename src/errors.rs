//! Errors raised while encoding or decoding paging tokens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagingError {
    /// Header is not four integers, or the payload is not well-formed JSON.
    #[error("malformed paging token {token:?}: {reason}")]
    MalformedToken { token: String, reason: String },

    /// Page or page size is negative or above the configured bounds.
    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: usize,
    },

    /// Payload could not be merged into the target filter type.
    #[error("cannot decode paging token {token:?} into {target}: {source}")]
    TokenDecode {
        token: String,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode search keys: {0}")]
    TokenEncode(#[source] serde_json::Error),
}

pub type PagingResult<T> = Result<T, PagingError>;

impl PagingError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        PagingError::MalformedToken {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the token itself is corrupt rather than out of policy.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            PagingError::MalformedToken { .. } | PagingError::TokenDecode { .. }
        )
    }
}
