//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::models::{ListParams, ListQuery};

/// Pull `range`/`sort` from the query string.
///
/// Never rejects: an unparseable query string behaves like an empty one.
/// Repeated keys keep their first value.
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| ListParams::from_pairs(pairs))
            .unwrap_or_default();
        Ok(params.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortField, SortOrder};
    use axum::http::Request;

    async fn extract(uri: &str) -> ListQuery {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ListQuery::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_url_encoded_arrays() {
        let q = extract("/admin/users?range=%5B5%2C9%5D&sort=%5B%22email%22%2C%22ASC%22%5D").await;
        assert_eq!((q.offset, q.limit), (5, 5));
        assert_eq!(q.order_by, SortField::Email);
        assert_eq!(q.order_dir, SortOrder::Asc);
    }

    #[tokio::test]
    async fn repeated_sort_keeps_range() {
        let q = extract("/admin/users?range=%5B5%2C9%5D&sort=%5B%22email%22%2C%22ASC%22%5D&sort=x").await;
        assert_eq!((q.offset, q.limit), (5, 5));
        assert_eq!(q.order_by, SortField::Email);
        assert_eq!(q.order_dir, SortOrder::Asc);
    }

    #[tokio::test]
    async fn missing_query_string_is_default() {
        assert_eq!(extract("/admin/users").await, ListQuery::default());
    }

    #[tokio::test]
    async fn junk_parameters_are_default() {
        let q = extract("/admin/users?range=oops&sort=%5B%22bogus%22%2C%22ASC%22%5D&filter=%7B%7D").await;
        assert_eq!(q, ListQuery::default());
    }
}
