//! Paging fields submitted by list screens.

use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Hidden paging token plus the optional jump-to-page input.
pub struct PagingForm {
    /// Token produced by a previous page render.
    #[serde(default)]
    pub search_keys: Option<String>,
    /// Page number typed into a jump form.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub specified_page_num: Option<i64>,
}

impl PagingForm {
    /// Parses an urlencoded query string or form body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        let form: Self = serde_html_form::from_bytes(body)?;
        form.validate()?;
        Ok(form)
    }

    /// The submitted token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.search_keys
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
