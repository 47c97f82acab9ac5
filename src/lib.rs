//! Stateless paging for server-rendered search screens.
//!
//! The paging state of a result list (current page, result count, page size,
//! number of page links) travels with the search filter in one opaque token,
//! so list screens can page through results with plain links and forms and
//! without keeping anything in a session.
//!
//! The `data` feature builds the reusable core; `server` adds the actix and
//! tera glue and the `paging-inspect` binary.

#[cfg(feature = "data")]
pub mod codec;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod errors;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod paging;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "server")]
pub mod web;

#[cfg(feature = "data")]
pub use errors::{PagingError, PagingResult};
#[cfg(feature = "data")]
pub use paging::WebPaging;
