//! Mock counters for isolating services in tests.

use mockall::mock;

use crate::domain::member::MemberSearchKeys;
use crate::repository::SearchCounter;
use crate::repository::errors::RepositoryResult;

mock! {
    pub MemberCounter {}

    impl SearchCounter<MemberSearchKeys> for MemberCounter {
        fn count_matches(&self, keys: &MemberSearchKeys) -> RepositoryResult<usize>;
    }
}
