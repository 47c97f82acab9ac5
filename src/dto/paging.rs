//! Template data for rendering paging controls.

use serde::Serialize;

use crate::domain::search_keys::SearchKeys;
use crate::errors::{PagingError, PagingResult};
use crate::paging::WebPaging;

/// A single link target: the page it leads to and the token to submit.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub token: String,
    /// True for the page currently shown.
    pub current: bool,
}

/// Everything a template needs to render prev/next, first/last, numbered
/// page links and a jump-to-page form.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PagingView {
    pub page: usize,
    pub max_page: usize,
    pub count: usize,
    pub page_size: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// Token of the current state, for forms that re-submit the search.
    pub token: String,
    pub first: PageLink,
    pub prev: PageLink,
    pub next: PageLink,
    pub last: PageLink,
    /// Token for the jump form; the page travels in its own field.
    pub specify: String,
    pub window: Vec<PageLink>,
}

/// Result of a paged search request: the filter to run the page query
/// with, and the links to render around the results.
#[derive(Clone, Debug, Serialize)]
pub struct SearchPageData<K> {
    pub keys: K,
    pub paging: PagingView,
}

impl PageLink {
    fn new<K: SearchKeys>(paging: &WebPaging<K>, current_page: usize) -> PagingResult<Self> {
        Ok(Self {
            page: paging.page(),
            token: paging.encode()?,
            current: paging.page() == current_page,
        })
    }
}

impl<K: SearchKeys> TryFrom<&WebPaging<K>> for PagingView {
    type Error = PagingError;

    fn try_from(paging: &WebPaging<K>) -> Result<Self, Self::Error> {
        let current = paging.page();
        let window = paging
            .window()
            .iter()
            .map(|snapshot| PageLink::new(snapshot, current))
            .collect::<PagingResult<Vec<_>>>()?;

        Ok(Self {
            page: current,
            max_page: paging.max_page(),
            count: paging.count(),
            page_size: paging.page_size(),
            is_first: paging.is_first(),
            is_last: paging.is_last(),
            token: paging.encode()?,
            first: PageLink::new(&paging.first(), current)?,
            prev: PageLink::new(&paging.prev(), current)?,
            next: PageLink::new(&paging.next(), current)?,
            last: PageLink::new(&paging.last(), current)?,
            specify: paging.encode_for_jump()?,
            window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search_keys::BaseSearchKeys;

    #[test]
    fn view_lists_window_and_marks_current_page() {
        let paging = WebPaging::with_window(BaseSearchKeys::new(0, 5), 23, 2).with_page(2);

        let view = PagingView::try_from(&paging).unwrap();

        assert_eq!(view.max_page, 5);
        assert_eq!(
            view.window.iter().map(|link| link.page).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            view.window
                .iter()
                .filter(|link| link.current)
                .map(|link| link.page)
                .collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(view.prev.page, 1);
        assert_eq!(view.next.page, 3);
        assert_eq!(view.last.token, r#"23:5:2:5,{"page":4,"pageSize":5}"#);
        assert_eq!(view.specify, r#"23:0:2:5,{"page":1,"pageSize":5}"#);
    }

    #[test]
    fn single_page_links_point_to_page_one() {
        let paging = WebPaging::new(BaseSearchKeys::default(), 0);

        let view = PagingView::try_from(&paging).unwrap();

        assert!(view.is_first && view.is_last);
        assert_eq!(view.prev, view.next);
        assert_eq!(view.window.len(), 1);
        assert!(view.window[0].current);
    }
}
