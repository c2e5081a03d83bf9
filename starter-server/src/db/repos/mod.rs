//! Repository implementations for database access
//!
//! Handlers see repositories only through the `UserStore` trait, so the
//! PostgreSQL store and the in-memory store are interchangeable.

pub mod memory;
pub mod users;

pub use memory::MemoryUserStore;
pub use users::{DbError, PgUserStore, UserStore};
