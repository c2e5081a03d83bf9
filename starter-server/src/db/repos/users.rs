//! User repository
//!
//! Read-only access to the `users` table:
//! - count: unfiltered total
//! - list: ordered page, undecodable rows skipped
//! - get_by_id: single row or `DbError::NotFound`

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::db::pool;
use crate::models::{ListQuery, User};

/// Columns selected for every user read. `id` is a text primary key, so
/// lookups compare it uncast and stay on the index.
const USER_COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Read access to users, injected into handlers through `AppState`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// True when the store answers a trivial query.
    async fn ping(&self) -> bool;

    /// Total number of users.
    async fn count(&self) -> Result<i64, DbError>;

    /// One page of users in the requested order.
    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, DbError>;

    /// A single user by id.
    async fn get_by_id(&self, id: &str) -> Result<User, DbError>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ping(&self) -> bool {
        pool::ping(&self.pool).await.is_ok()
    }

    async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, DbError> {
        let mut builder = list_statement(query);
        let rows = builder.build().fetch_all(&self.pool).await?;

        let users = rows
            .iter()
            .filter_map(|row| match user_from_row(row) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable user row");
                    None
                }
            })
            .collect();

        Ok(users)
    }

    async fn get_by_id(&self, id: &str) -> Result<User, DbError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "User",
                id: id.to_owned(),
            })?;

        Ok(user_from_row(&row)?)
    }
}

/// SELECT for one page. ORDER BY only ever receives the static
/// identifiers from `SortField`/`SortOrder`; limit and offset are bound.
fn list_statement(query: &ListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder
        .push(USER_COLUMNS)
        .push(" FROM users ORDER BY ")
        .push(query.order_by.column())
        .push(" ")
        .push(query.order_dir.as_sql())
        .push(" LIMIT ")
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.offset);
    builder
}

fn user_from_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

/// Accepts both `timestamptz` and `timestamp` columns; the latter are UTC.
fn timestamp(row: &PgRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    row.try_get::<DateTime<Utc>, _>(column)
        .or_else(|_| row.try_get::<NaiveDateTime, _>(column).map(|t| t.and_utc()))
}
