//! Member search filter used by the member listing screens.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::search_keys::BaseSearchKeys;
use crate::search_keys;

/// Sort members by identifier.
pub const ORDER_ID: i32 = 1;
/// Sort members by name.
pub const ORDER_NAME: i32 = 2;
/// Sort members by age.
pub const ORDER_AGE: i32 = 32;

/// Age bound meaning "not filtered".
pub const AGE_UNSET: i32 = -1;

/// Search criteria for the member list.
#[derive(Clone, Debug, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberSearchKeys {
    #[serde(flatten)]
    pub paging: BaseSearchKeys,
    #[validate(range(min = 1))]
    pub id: Option<i32>,
    /// Exact name match.
    #[validate(length(max = 20))]
    pub name: Option<String>,
    /// Name prefix match.
    #[serde(rename = "nameBW")]
    #[validate(length(max = 20))]
    pub name_begins_with: Option<String>,
    #[validate(range(min = -1, max = 200))]
    pub age_from: i32,
    #[validate(range(min = -1, max = 200))]
    pub age_to: i32,
    #[validate(length(max = 20))]
    pub login_id: Option<String>,
    pub order_by: Vec<i32>,
}

impl Default for MemberSearchKeys {
    fn default() -> Self {
        Self {
            paging: BaseSearchKeys::default(),
            id: None,
            name: None,
            name_begins_with: None,
            age_from: AGE_UNSET,
            age_to: AGE_UNSET,
            login_id: None,
            order_by: Vec::new(),
        }
    }
}

search_keys!(MemberSearchKeys, paging);

impl MemberSearchKeys {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn ages(mut self, from: i32, to: i32) -> Self {
        self.age_from = from;
        self.age_to = to;
        self
    }

    pub fn order_by(mut self, order: &[i32]) -> Self {
        self.order_by = order.to_vec();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search_keys::SearchKeys;

    #[test]
    fn payload_is_flat_camel_case_object() {
        let mut keys = MemberSearchKeys::default().name("alice").order_by(&[ORDER_NAME]);
        keys.set_page(1);
        keys.set_page_size(10);

        let value = serde_json::to_value(&keys).unwrap();

        assert_eq!(value["page"], 1);
        assert_eq!(value["pageSize"], 10);
        assert_eq!(value["name"], "alice");
        assert_eq!(value["ageFrom"], AGE_UNSET);
        assert_eq!(value["orderBy"], serde_json::json!([ORDER_NAME]));
        assert!(value.get("nameBW").is_some());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let keys: MemberSearchKeys = serde_json::from_str(r#"{"loginId":"bob"}"#).unwrap();

        assert_eq!(keys.login_id.as_deref(), Some("bob"));
        assert_eq!(keys.age_to, AGE_UNSET);
        assert_eq!(keys.page(), 0);
    }

    #[test]
    fn range_checks_reject_out_of_policy_values() {
        let keys = MemberSearchKeys::default().ages(-1, 201);
        assert!(keys.validate().is_err());

        let keys = MemberSearchKeys::default().name("x".repeat(21));
        assert!(keys.validate().is_err());

        let keys = MemberSearchKeys::default().name("太郎").ages(20, 30);
        assert!(keys.validate().is_ok());
    }
}
