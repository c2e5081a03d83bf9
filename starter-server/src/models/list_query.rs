//! List-view query parameters
//!
//! Admin frontends send pagination and sorting as JSON arrays in the query
//! string: `range=[0,24]` and `sort=["name","ASC"]`. Translation is total:
//! anything that doesn't parse cleanly falls back to the defaults.


/// Default number of rows per page
pub const DEFAULT_LIMIT: i64 = 25;

/// Column a user list may be ordered by.
///
/// The only values that ever reach an ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    Name,
    Email,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Resolve a client-supplied field name.
    ///
    /// Accepts both the camelCase names and the column names the admin
    /// frontend derives from the JSON keys.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "updatedAt" | "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// SQL column identifier.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only the exact string `ASC` sorts ascending.
    pub fn from_param(value: &str) -> Self {
        if value == "ASC" {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw query-string parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub range: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Collect from decoded query pairs. The first `range` and the first
    /// `sort` win; repeats and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "range" => &mut params.range,
                "sort" => &mut params.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Fully resolved list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: i64,
    pub limit: i64,
    pub order_by: SortField,
    pub order_dir: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            order_by: SortField::default(),
            order_dir: SortOrder::default(),
        }
    }
}

impl ListQuery {
    /// Translate raw `range`/`sort` parameters. Never fails.
    pub fn from_params(range: Option<&str>, sort: Option<&str>) -> Self {
        let mut query = Self::default();

        if let Some((offset, limit)) = range.and_then(parse_range) {
            query.offset = offset;
            query.limit = limit;
        }

        if let Some((field, order)) = sort.and_then(parse_sort) {
            query.order_by = field;
            query.order_dir = order;
        }

        query
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self::from_params(params.range.as_deref(), params.sort.as_deref())
    }
}

/// `[start, end]` inclusive -> `(offset, limit)`.
///
/// A negative start or an end before start can't be expressed as
/// OFFSET/LIMIT and counts as malformed.
fn parse_range(raw: &str) -> Option<(i64, i64)> {
    let bounds: Vec<i64> = serde_json::from_str(raw).ok()?;
    let &[start, end] = bounds.as_slice() else {
        return None;
    };
    let limit = end.checked_sub(start)?.checked_add(1)?;
    (start >= 0 && limit > 0).then_some((start, limit))
}

/// `[field, direction]` -> allow-listed field and direction.
fn parse_sort(raw: &str) -> Option<(SortField, SortOrder)> {
    let parts: Vec<String> = serde_json::from_str(raw).ok()?;
    let [field, direction] = parts.as_slice() else {
        return None;
    };
    let field = SortField::from_param(field)?;
    Some((field, SortOrder::from_param(direction)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_use_defaults() {
        let q = ListQuery::from_params(None, None);
        assert_eq!(q, ListQuery::default());
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, 25);
        assert_eq!(q.order_by, SortField::CreatedAt);
        assert_eq!(q.order_dir, SortOrder::Desc);
    }

    #[test]
    fn range_sets_offset_and_limit() {
        let q = ListQuery::from_params(Some("[5,9]"), None);
        assert_eq!(q.offset, 5);
        assert_eq!(q.limit, 5);

        let q = ListQuery::from_params(Some("[0, 24]"), None);
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, 25);

        let q = ListQuery::from_params(Some("[3,3]"), None);
        assert_eq!(q.limit, 1);
    }

    #[test]
    fn malformed_range_falls_back() {
        for raw in [
            "",
            "[",
            "not json",
            "[1]",
            "[1,2,3]",
            "[\"a\",\"b\"]",
            "[1.5,2]",
            "{\"start\":0}",
            "[10,2]",
            "[-5,4]",
            "[0,9223372036854775807]",
        ] {
            let q = ListQuery::from_params(Some(raw), None);
            assert_eq!((q.offset, q.limit), (0, DEFAULT_LIMIT), "range {raw:?}");
        }
    }

    #[test]
    fn sort_sets_field_and_direction() {
        let q = ListQuery::from_params(None, Some(r#"["email","ASC"]"#));
        assert_eq!(q.order_by, SortField::Email);
        assert_eq!(q.order_dir, SortOrder::Asc);

        let q = ListQuery::from_params(None, Some(r#"["name","DESC"]"#));
        assert_eq!(q.order_by, SortField::Name);
        assert_eq!(q.order_dir, SortOrder::Desc);
    }

    #[test]
    fn non_asc_direction_is_desc() {
        for dir in ["asc", "Asc", "up", ""] {
            let raw = format!(r#"["id","{dir}"]"#);
            let q = ListQuery::from_params(None, Some(&raw));
            assert_eq!(q.order_by, SortField::Id);
            assert_eq!(q.order_dir, SortOrder::Desc, "direction {dir:?}");
        }
    }

    #[test]
    fn disallowed_field_ignores_direction_too() {
        let q = ListQuery::from_params(None, Some(r#"["bogus","ASC"]"#));
        assert_eq!(q.order_by, SortField::CreatedAt);
        assert_eq!(q.order_dir, SortOrder::Desc);

        let q = ListQuery::from_params(None, Some(r#"["name; DROP TABLE users","ASC"]"#));
        assert_eq!(q.order_by, SortField::CreatedAt);
        assert_eq!(q.order_dir, SortOrder::Desc);
    }

    #[test]
    fn malformed_sort_falls_back() {
        for raw in ["", "[", r#"["name"]"#, r#"["name","ASC","x"]"#, "[1,2]", r#""name""#] {
            let q = ListQuery::from_params(None, Some(raw));
            assert_eq!(q.order_by, SortField::CreatedAt, "sort {raw:?}");
            assert_eq!(q.order_dir, SortOrder::Desc, "sort {raw:?}");
        }
    }

    #[test]
    fn column_names_are_accepted() {
        let q = ListQuery::from_params(None, Some(r#"["updated_at","ASC"]"#));
        assert_eq!(q.order_by, SortField::UpdatedAt);
        assert_eq!(q.order_by.column(), "updated_at");

        let q = ListQuery::from_params(None, Some(r#"["createdAt","ASC"]"#));
        assert_eq!(q.order_by, SortField::CreatedAt);
        assert_eq!(q.order_dir, SortOrder::Asc);
    }

    #[test]
    fn range_and_sort_are_independent() {
        let q = ListQuery::from_params(Some("garbage"), Some(r#"["email","ASC"]"#));
        assert_eq!((q.offset, q.limit), (0, DEFAULT_LIMIT));
        assert_eq!(q.order_by, SortField::Email);

        let q = ListQuery::from(ListParams {
            range: Some("[10,19]".into()),
            sort: Some("garbage".into()),
        });
        assert_eq!((q.offset, q.limit), (10, 10));
        assert_eq!(q.order_by, SortField::CreatedAt);
    }

    #[test]
    fn first_occurrence_of_each_param_wins() {
        let params = ListParams::from_pairs([
            ("range", "[5,9]"),
            ("sort", r#"["email","ASC"]"#),
            ("filter", "{}"),
            ("sort", "x"),
            ("range", "[0,0]"),
        ]);
        assert_eq!(params.range.as_deref(), Some("[5,9]"));
        assert_eq!(params.sort.as_deref(), Some(r#"["email","ASC"]"#));
    }
}
