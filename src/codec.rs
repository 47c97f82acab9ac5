//! Paging token wire format.
//!
//! A token is `<count>:<page>:<windowSize>:<pageSize>,<payload>` where the
//! payload is the search filter serialized as a JSON object. Only the first
//! `,` separates header from payload, so the payload may contain any
//! character JSON allows.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

use crate::domain::bounds::Bounds;
use crate::domain::search_keys::SearchKeys;
use crate::errors::{PagingError, PagingResult};

pub const HEADER_SEPARATOR: char = ':';
pub const PAYLOAD_SEPARATOR: char = ',';

/// Numeric paging state carried in front of the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenHeader {
    pub count: usize,
    /// 1-based page, `0` meaning "keep the current page".
    pub page: usize,
    pub window_size: usize,
    pub page_size: usize,
}

impl Display for TokenHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{count}{sep}{page}{sep}{window}{sep}{page_size}",
            count = self.count,
            page = self.page,
            window = self.window_size,
            page_size = self.page_size,
            sep = HEADER_SEPARATOR,
        )
    }
}

/// Token split into a validated header and a parsed, not yet merged payload.
#[derive(Debug)]
pub struct RawToken<'a> {
    pub token: &'a str,
    pub header: TokenHeader,
    pub payload: Value,
}

/// Serializes a header and a filter into a token string.
pub fn encode<K: Serialize>(header: &TokenHeader, keys: &K) -> PagingResult<String> {
    let payload = serde_json::to_string(keys).map_err(PagingError::TokenEncode)?;
    Ok(format!("{header}{PAYLOAD_SEPARATOR}{payload}"))
}

/// Splits a token and validates its header against `bounds`.
///
/// The payload only has to be well-formed JSON here; its shape is checked when
/// it is merged into a filter with [`merge_keys`].
pub fn parse<'a>(token: &'a str, bounds: &Bounds) -> PagingResult<RawToken<'a>> {
    let (header, payload) = token
        .split_once(PAYLOAD_SEPARATOR)
        .ok_or_else(|| PagingError::malformed(token, "missing payload separator"))?;

    let fields: Vec<&str> = header.split(HEADER_SEPARATOR).collect();
    let [count, page, window_size, page_size] = fields.as_slice() else {
        return Err(PagingError::malformed(
            token,
            format!("expected 4 header fields, found {}", fields.len()),
        ));
    };

    let count = parse_field(token, "count", count)?;
    let page = parse_field(token, "page", page)?;
    let window_size = parse_field(token, "windowSize", window_size)?;
    let page_size = parse_field(token, "pageSize", page_size)?;

    let count = usize::try_from(count)
        .map_err(|_| PagingError::malformed(token, format!("negative count {count}")))?;
    let window_size = match usize::try_from(window_size) {
        Ok(window_size) if window_size > 0 => window_size,
        _ => {
            return Err(PagingError::malformed(
                token,
                format!("invalid window size {window_size}"),
            ));
        }
    };
    let page = bounds.check_page(page)?;
    let page_size = bounds.check_page_size(page_size)?;

    let payload = serde_json::from_str(payload)
        .map_err(|e| PagingError::malformed(token, format!("invalid payload: {e}")))?;

    Ok(RawToken {
        token,
        header: TokenHeader {
            count,
            page,
            window_size,
            page_size,
        },
        payload,
    })
}

fn parse_field(token: &str, name: &str, value: &str) -> PagingResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| PagingError::malformed(token, format!("{name} is not an integer: {value:?}")))
}

/// Merges a payload into a copy of `target`.
///
/// Fields present in the payload overwrite the target's; absent fields keep
/// the target's values. Nested objects merge recursively, everything else is
/// replaced.
pub fn merge_keys<K: SearchKeys>(token: &str, target: &K, payload: Value) -> PagingResult<K> {
    let mut merged = serde_json::to_value(target).map_err(PagingError::TokenEncode)?;
    merge_value(&mut merged, payload);
    serde_json::from_value(merged).map_err(|source| PagingError::TokenDecode {
        token: token.to_string(),
        target: short_type_name::<K>(),
        source,
    })
}

fn merge_value(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (name, value) in patch {
                match base.get_mut(&name) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base.insert(name, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
