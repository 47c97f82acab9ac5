//! Services turning submitted paging forms into query-ready state.

use validator::Validate;

use crate::domain::search_keys::SearchKeys;
use crate::dto::paging::{PagingView, SearchPageData};
use crate::forms::paging::PagingForm;
use crate::models::config::PagingConfig;
use crate::paging::WebPaging;
use crate::repository::SearchCounter;
use crate::services::{ServiceError, ServiceResult};

/// What to do with a token that fails to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Log the failure and continue from the defaults.
    #[default]
    Defaults,
    /// Return the decode error to the caller.
    Reject,
}

/// Builds the paging state for a request.
///
/// Starts from `keys` on page 1 with the configured page size, then applies
/// the submitted token and the jump-to page when present.
pub fn load_paging<K>(
    form: &PagingForm,
    keys: K,
    config: &PagingConfig,
    policy: FallbackPolicy,
) -> ServiceResult<WebPaging<K>>
where
    K: SearchKeys,
{
    let mut paging = WebPaging::at_page(keys, 0, 1, config.window_size);
    paging.set_page_size(config.default_page_size);
    paging.set_bounds(config.bounds());

    if let Some(token) = form.token() {
        if let Err(err) = paging.load_token(token) {
            match policy {
                FallbackPolicy::Defaults => {
                    log::warn!("Ignoring paging token, using defaults: {err}");
                }
                FallbackPolicy::Reject => return Err(err.into()),
            }
        }
    }

    if let Some(page) = form.specified_page_num {
        paging.set_specified_page_num(page)?;
    }

    Ok(paging)
}

/// Asks the counter how many rows the filter matches and updates the state.
pub fn refresh<K, R>(paging: &mut WebPaging<K>, counter: &R) -> ServiceResult<()>
where
    K: SearchKeys,
    R: SearchCounter<K> + ?Sized,
{
    let count = counter.count_matches(&paging.to_search_keys())?;
    paging.set_count(count);
    Ok(())
}

/// Loads, validates and counts a search, returning the filter for the page
/// query together with the rendered paging links.
pub fn search_page<K, R>(
    counter: &R,
    form: &PagingForm,
    keys: K,
    config: &PagingConfig,
    policy: FallbackPolicy,
) -> ServiceResult<SearchPageData<K>>
where
    K: SearchKeys + Validate,
    R: SearchCounter<K> + ?Sized,
{
    let mut paging = load_paging(form, keys, config, policy)?;

    if let Err(err) = paging.keys().validate() {
        log::error!("Failed to validate search keys: {err}");
        return Err(ServiceError::Form("invalid search criteria".to_string()));
    }

    refresh(&mut paging, counter).map_err(|err| {
        log::error!("Failed to count search results: {err}");
        err
    })?;

    let view = PagingView::try_from(&paging)?;

    Ok(SearchPageData {
        keys: paging.to_search_keys(),
        paging: view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberSearchKeys;
    use crate::domain::search_keys::SearchKeys;
    use crate::errors::PagingError;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockMemberCounter;

    fn form(token: Option<&str>, page: Option<i64>) -> PagingForm {
        PagingForm {
            search_keys: token.map(str::to_string),
            specified_page_num: page,
        }
    }

    /// First visit starts on page 1 with configured sizes.
    #[test]
    fn defaults_without_token() {
        let config = PagingConfig::default();

        let paging = load_paging(
            &PagingForm::default(),
            MemberSearchKeys::default(),
            &config,
            FallbackPolicy::Reject,
        )
        .unwrap();

        assert_eq!(paging.page(), 1);
        assert_eq!(paging.page_size(), config.default_page_size);
        assert_eq!(paging.window_size(), config.window_size);
        assert_eq!(paging.bounds(), config.bounds());
    }

    #[test]
    fn token_is_applied() {
        let token = r#"40:3:4:10,{"name":"alice"}"#;

        let paging = load_paging(
            &form(Some(token), None),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Reject,
        )
        .unwrap();

        assert_eq!(paging.page(), 3);
        assert_eq!(paging.count(), 40);
        assert_eq!(paging.window_size(), 4);
        assert_eq!(paging.keys().name.as_deref(), Some("alice"));
    }

    #[test]
    fn broken_token_falls_back_to_defaults() {
        let paging = load_paging(
            &form(Some("abc:1:5:10,{}"), None),
            MemberSearchKeys::default().name("kept"),
            &PagingConfig::default(),
            FallbackPolicy::Defaults,
        )
        .unwrap();

        assert_eq!(paging.page(), 1);
        assert_eq!(paging.keys().name.as_deref(), Some("kept"));
    }

    #[test]
    fn broken_token_is_rejected_on_request() {
        let result = load_paging(
            &form(Some("0:101:5:10,{}"), None),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Reject,
        );

        assert!(matches!(
            result,
            Err(ServiceError::Paging(PagingError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn jump_page_overrides_token_page() {
        let paging = load_paging(
            &form(Some(r#"100:0:5:10,{}"#), Some(7)),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Reject,
        )
        .unwrap();

        assert_eq!(paging.page(), 7);
        assert_eq!(paging.keys().page(), 6);
    }

    #[test]
    fn refresh_feeds_count_back() {
        let mut counter = MockMemberCounter::new();
        counter
            .expect_count_matches()
            .withf(|keys| keys.name.as_deref() == Some("bob") && keys.page() == 4)
            .times(1)
            .returning(|_| Ok(12));
        let mut paging = WebPaging::at_page(MemberSearchKeys::default().name("bob"), 100, 5, 2);
        paging.set_page_size(10);
        paging.set_specified_page_num(5).unwrap();

        refresh(&mut paging, &counter).unwrap();

        assert_eq!(paging.count(), 12);
        assert_eq!(paging.max_page(), 2);
        assert_eq!(paging.page(), 2);
    }

    #[test]
    fn search_page_returns_keys_and_links() {
        let mut counter = MockMemberCounter::new();
        counter
            .expect_count_matches()
            .times(1)
            .returning(|_| Ok(23));
        let token = r#"23:2:2:5,{"name":"太郎"}"#;

        let data = search_page(
            &counter,
            &form(Some(token), None),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Reject,
        )
        .unwrap();

        assert_eq!(data.keys.skip_rows(), 5);
        assert_eq!(data.paging.max_page, 5);
        assert_eq!(data.paging.page, 2);
        assert_eq!(
            data.paging.window.iter().map(|l| l.page).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn search_page_rejects_invalid_keys_before_counting() {
        let mut counter = MockMemberCounter::new();
        counter.expect_count_matches().times(0);

        let result = search_page(
            &counter,
            &form(Some(r#"0:1:5:10,{"ageTo":500}"#), None),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Reject,
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn counter_failure_is_surfaced() {
        let mut counter = MockMemberCounter::new();
        counter
            .expect_count_matches()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let result = search_page(
            &counter,
            &PagingForm::default(),
            MemberSearchKeys::default(),
            &PagingConfig::default(),
            FallbackPolicy::Defaults,
        );

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
