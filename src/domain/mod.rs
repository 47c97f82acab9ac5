//! Domain types shared by the codec, the navigator and the services.

pub mod bounds;
pub mod member;
pub mod search_keys;
