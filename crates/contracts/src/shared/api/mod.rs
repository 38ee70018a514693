//! Wire types shared by every REST call: envelopes, errors and list queries.

pub mod envelope;
pub mod error;
pub mod query;

pub use envelope::{ErrorBody, ItemResponse, ListResponse, MessageResponse, PaginationMeta};
pub use error::ApiError;
pub use query::ListQuery;
