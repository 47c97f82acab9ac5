//! Paging state carried between stateless web requests.
//!
//! [`WebPaging`] wraps a search filter together with the numeric paging state
//! (current page, result count, page size, link window) and converts the
//! whole thing to and from a single token suitable for a hidden form field or
//! a query parameter:
//!
//! ```text
//! <count>:<page>:<windowSize>:<pageSize>,<filter as JSON>
//! ```
//!
//! Navigation methods (`next`, `prev`, `window`, ...) never touch the
//! receiver. They return snapshots that share the filter through an [`Arc`],
//! so rendering many page links costs one filter allocation. Mutators on a
//! state whose filter is shared copy the filter first, leaving snapshots as
//! they were.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::codec::{self, TokenHeader};
use crate::domain::bounds::{self, Bounds};
use crate::domain::search_keys::SearchKeys;
use crate::errors::PagingResult;

/// Link window used by [`WebPaging::new`]. Request handling takes its window
/// from [`crate::models::config::PagingConfig::window_size`] instead.
pub const CONSTRUCTOR_WINDOW_SIZE: usize = 10;

/// 1-based page number to the filter's 0-based page index.
fn page_index(page: usize) -> usize {
    page.saturating_sub(1)
}

/// The filter's 0-based page index to a 1-based page number.
fn page_number(index: usize) -> usize {
    index.saturating_add(1)
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebPaging<K> {
    keys: Arc<K>,
    page: usize,
    max_page: usize,
    count: usize,
    page_size: usize,
    window_size: usize,
    bounds: Bounds,
}

impl<K: SearchKeys> WebPaging<K> {
    /// Wraps `keys` with the default link window, starting on the page the
    /// filter already points at.
    pub fn new(keys: K, count: usize) -> Self {
        Self::with_window(keys, count, CONSTRUCTOR_WINDOW_SIZE)
    }

    pub fn with_window(keys: K, count: usize, window_size: usize) -> Self {
        let page = page_number(keys.page());
        Self::at_page(keys, count, page, window_size)
    }

    /// Builds a state on an explicit 1-based `page`.
    ///
    /// # Panics
    ///
    /// Panics when `window_size` is not greater than 1.
    pub fn at_page(keys: K, count: usize, page: usize, window_size: usize) -> Self {
        assert!(window_size > 1, "window size must be greater than 1");

        let page_size = keys.page_size();
        let mut paging = Self {
            keys: Arc::new(keys),
            page: 1,
            max_page: 1,
            count: 0,
            page_size,
            window_size,
            bounds: Bounds::default(),
        };
        paging.set_count_and_page_size(count, page_size);
        paging.put_page(page);
        paging
    }

    /// Decodes `token` into a fresh state seeded with `keys`.
    ///
    /// A header page of `0` lands on the page `keys` points at, clamped
    /// against the decoded count.
    pub fn decode(token: &str, keys: K, bounds: Bounds) -> PagingResult<Self> {
        let seeded_page = page_number(keys.page());
        let mut paging = Self::new(keys, 0);
        paging.set_bounds(bounds);
        paging.apply_token(token, seeded_page)?;
        Ok(paging)
    }

    /// Current page, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Records per page, `0` meaning a single unbounded page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Total number of results matching the filter.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The shared filter. Its paging fields follow the state that last
    /// mutated it, not navigation snapshots.
    pub(crate) fn keys(&self) -> &K {
        &self.keys
    }

    /// Owned copy of the filter with this state's page and page size applied,
    /// ready to be handed to the query.
    pub fn to_search_keys(&self) -> K {
        let mut keys = K::clone(&self.keys);
        keys.set_page(page_index(self.page));
        keys.set_page_size(self.page_size);
        keys
    }

    /// Stores the result count reported by the query and recomputes
    /// `max_page`.
    pub fn set_count(&mut self, count: usize) {
        self.set_count_and_page_size(count, self.page_size);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.set_count_and_page_size(self.count, page_size);
    }

    /// Sets count and page size together, then pulls the current page back
    /// inside the new `max_page`.
    pub fn set_count_and_page_size(&mut self, count: usize, page_size: usize) {
        self.count = count;
        self.page_size = page_size;
        self.max_page = bounds::max_page(count, page_size);
        self.put_page(self.page);
    }

    /// Moves to `page` with a new page size, keeping the current count.
    pub fn reset(&mut self, page: usize, page_size: usize) {
        self.page = page;
        self.set_count_and_page_size(self.count, page_size);
    }

    /// # Panics
    ///
    /// Panics when `window_size` is not greater than 1.
    pub fn set_window_size(&mut self, window_size: usize) {
        assert!(window_size > 1, "window size must be greater than 1");
        self.window_size = window_size;
    }

    /// Limits accepted by [`Self::load_token`].
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Jumps to a page typed in by the user.
    ///
    /// The number is checked against the bounds, then clamped to
    /// `1..=max_page`.
    pub fn set_specified_page_num(&mut self, page: i64) -> PagingResult<()> {
        let page = self.bounds.check_page(page)?;
        self.put_page(page);
        Ok(())
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.max_page)
    }

    /// Sets the page on this state and on the filter.
    fn put_page(&mut self, page: usize) {
        self.page = self.clamp(page);
        self.sync_keys();
    }

    fn sync_keys(&mut self) {
        let index = page_index(self.page);
        if self.keys.page() != index || self.keys.page_size() != self.page_size {
            let keys = Arc::make_mut(&mut self.keys);
            keys.set_page(index);
            keys.set_page_size(self.page_size);
        }
    }

    /// Snapshot positioned on `page`, clamped to `1..=max_page`.
    pub fn with_page(&self, page: usize) -> Self {
        let mut paging = self.clone();
        paging.page = self.clamp(page);
        paging
    }

    pub fn next(&self) -> Self {
        self.with_page(self.page.saturating_add(1))
    }

    pub fn prev(&self) -> Self {
        self.with_page(self.page.saturating_sub(1))
    }

    pub fn first(&self) -> Self {
        self.with_page(1)
    }

    pub fn last(&self) -> Self {
        self.with_page(self.max_page)
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.max_page
    }

    /// Snapshots for every page within `window_size` of the current one, in
    /// ascending order.
    pub fn window(&self) -> Vec<Self> {
        let start = self.page.saturating_sub(self.window_size).max(1);
        let end = self
            .page
            .saturating_add(self.window_size)
            .min(self.max_page);

        std::iter::successors(Some(self.with_page(start)), |paging| Some(paging.next()))
            .take(end - start + 1)
            .collect()
    }

    fn header(&self, page: usize) -> TokenHeader {
        TokenHeader {
            count: self.count,
            page,
            window_size: self.window_size,
            page_size: self.page_size,
        }
    }

    /// Serializes the state into a token.
    pub fn encode(&self) -> PagingResult<String> {
        codec::encode(&self.header(self.page), &self.to_search_keys())
    }

    /// Token with page `0`, which decodes without moving off the current
    /// page. Used by jump-to-page forms that send the page separately.
    pub fn encode_for_jump(&self) -> PagingResult<String> {
        codec::encode(&self.header(0), &self.to_search_keys())
    }

    /// Loads an inbound token into this state.
    ///
    /// The header is checked against the bounds, the payload is merged into
    /// the current filter (fields absent from the payload keep their values)
    /// and `max_page` is recomputed. A header page of `0` keeps the current
    /// page. On error nothing is modified.
    pub fn load_token(&mut self, token: &str) -> PagingResult<()> {
        self.apply_token(token, self.page)
    }

    /// Loads `token`, landing on `current_page` when the header page is `0`.
    fn apply_token(&mut self, token: &str, current_page: usize) -> PagingResult<()> {
        let raw = codec::parse(token, &self.bounds)?;
        let keys = codec::merge_keys(raw.token, self.keys.as_ref(), raw.payload)?;
        let TokenHeader {
            count,
            page,
            window_size,
            page_size,
        } = raw.header;

        self.keys = Arc::new(keys);
        self.window_size = window_size;
        self.set_count_and_page_size(count, page_size);
        self.put_page(if page == 0 { current_page } else { page });

        log::debug!("Loaded paging token: {}", self);
        Ok(())
    }
}

impl<K> Display for WebPaging<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WebPaging[keys={}, page={}, pageSize={}, maxPage={}, count={}, windowSize={}]",
            codec::short_type_name::<K>(),
            self.page,
            self.page_size,
            self.max_page,
            self.count,
            self.window_size,
        )
    }
}
