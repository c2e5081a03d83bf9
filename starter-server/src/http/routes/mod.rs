//! Route handlers organized by resource

pub mod ai;
pub mod health;
pub mod hello;
pub mod users;
