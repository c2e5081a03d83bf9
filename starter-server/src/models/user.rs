//! User record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user row as exposed over the API.
///
/// Field order matches the `users` table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_columns_in_order() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let user = User {
            id: "u-1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"u-1","name":"Ada","email":"ada@example.com","created_at":"2024-05-01T12:00:00Z","updated_at":"2024-05-01T12:00:00Z"}"#
        );
    }
}
