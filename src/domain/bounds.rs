//! Acceptance envelope for inbound tokens and the page-count rule.

use serde::{Deserialize, Serialize};

use crate::errors::{PagingError, PagingResult};

/// Default maximum page number accepted from a token.
pub const DEFAULT_MAX_PAGE: usize = 100;
/// Default maximum page size accepted from a token.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Upper limits applied while decoding a token.
///
/// Bounds never influence the `max_page` derived from the result count; they
/// only reject tokens asking for an absurd page or page size before any query
/// runs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            page: DEFAULT_MAX_PAGE,
            page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl Bounds {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Checks a decoded page number.
    pub fn check_page(&self, page: i64) -> PagingResult<usize> {
        check("page", page, self.page)
    }

    /// Checks a decoded page size.
    pub fn check_page_size(&self, page_size: i64) -> PagingResult<usize> {
        check("pageSize", page_size, self.page_size)
    }
}

fn check(field: &'static str, value: i64, max: usize) -> PagingResult<usize> {
    match usize::try_from(value) {
        Ok(accepted) if accepted <= max => Ok(accepted),
        _ => Err(PagingError::OutOfRange { field, value, max }),
    }
}

/// Number of pages needed to show `count` results, never less than one.
///
/// A page size of `0` means a single unbounded page.
pub fn max_page(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        1
    } else {
        count.div_ceil(page_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_page_is_never_zero() {
        for count in 0..50 {
            for page_size in 0..12 {
                assert!(max_page(count, page_size) >= 1);
            }
        }
    }

    #[test]
    fn max_page_rounds_up() {
        assert_eq!(max_page(23, 5), 5);
        assert_eq!(max_page(25, 5), 5);
        assert_eq!(max_page(26, 5), 6);
        assert_eq!(max_page(0, 10), 1);
        assert_eq!(max_page(1000, 0), 1);
    }

    #[test]
    fn bounds_reject_values_above_limit_or_negative() {
        let bounds = Bounds::default();

        assert_eq!(bounds.check_page(100).unwrap(), 100);
        assert!(matches!(
            bounds.check_page(101),
            Err(PagingError::OutOfRange { field: "page", value: 101, max: 100 })
        ));
        assert!(matches!(
            bounds.check_page_size(-1),
            Err(PagingError::OutOfRange { field: "pageSize", .. })
        ));
        assert_eq!(Bounds::new(5, 0).check_page_size(0).unwrap(), 0);
    }
}
