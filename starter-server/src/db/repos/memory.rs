//! In-memory user store for tests and local demos

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;

use super::users::{DbError, UserStore};
use crate::models::{ListQuery, SortField, SortOrder, User};

/// User store backed by a `Vec`, with a switch to simulate an outage.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Vec<User>,
    offline: AtomicBool,
}

impl MemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail as if the database went away.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::SeqCst);
    }

    fn check_online(&self) -> Result<(), DbError> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ping(&self) -> bool {
        self.check_online().is_ok()
    }

    async fn count(&self) -> Result<i64, DbError> {
        self.check_online()?;
        Ok(self.users.len() as i64)
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, DbError> {
        self.check_online()?;
        let mut users = self.users.clone();
        users.sort_by(|a, b| {
            let ord = compare(a, b, query.order_by);
            match query.order_dir {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        Ok(users
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<User, DbError> {
        self.check_online()?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "User",
                id: id.to_owned(),
            })
    }
}

fn compare(a: &User, b: &User, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}
