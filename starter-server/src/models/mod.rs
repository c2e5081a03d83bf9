//! Domain models
//!
//! Client input is normalized when these types are built; malformed list
//! parameters degrade to defaults instead of producing errors.

pub mod envelope;
pub mod list_query;
pub mod user;

pub use envelope::{content_range, ItemEnvelope, ListEnvelope};
pub use list_query::{ListParams, ListQuery, SortField, SortOrder, DEFAULT_LIMIT};
pub use user::User;
