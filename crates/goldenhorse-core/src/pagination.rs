use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Parses the leading integer of a string, ignoring trailing garbage.
///
/// `"2abc"` parses to `2`; a string with no leading integer parses to
/// `None` so the caller's default applies.
fn parse_leading_i64(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits_start = usize::from(s.starts_with('-'));
    let end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| i + digits_start)
        .unwrap_or(s.len());
    s[..end].parse::<i64>().ok()
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_leading_i64))
}

/// Common list-endpoint query parameters: free-text search plus pagination.
///
/// `page` and `limit` arrive as strings from the query line and parse
/// leniently; unparseable values fall back to the defaults (page 1,
/// limit 10).
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListParams {
    /// Free-text search; empty matches everything.
    pub query: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub limit: Option<i64>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            query: None,
            page: Some(1),
            limit: Some(10),
        }
    }
}

impl ListParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).max(1).min(100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Search term, with empty strings treated as absent.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Serialize, ToSchema)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    /// Total page count: `ceil(total / limit)`.
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// A page of items plus its pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params = ListParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_from_page() {
        let params = ListParams {
            query: None,
            page: Some(3),
            limit: Some(10),
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_page_and_limit_clamped() {
        let params = ListParams {
            query: None,
            page: Some(0),
            limit: Some(500),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);

        let params = ListParams {
            query: None,
            page: Some(-2),
            limit: Some(0),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_empty_query_treated_as_absent() {
        let params = ListParams {
            query: Some(String::new()),
            page: None,
            limit: None,
        };
        assert_eq!(params.query(), None);
    }

    #[test]
    fn test_parse_leading_integer() {
        assert_eq!(parse_leading_i64("2"), Some(2));
        assert_eq!(parse_leading_i64("2abc"), Some(2));
        assert_eq!(parse_leading_i64("-3x"), Some(-3));
        assert_eq!(parse_leading_i64("abc"), None);
        assert_eq!(parse_leading_i64(""), None);
        assert_eq!(parse_leading_i64("  15 "), Some(15));
    }

    #[test]
    fn test_deserialize_lenient_values() {
        let json = r#"{"page":"2abc","limit":"25"}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_deserialize_garbage_falls_back_to_defaults() {
        let json = r#"{"page":"abc","limit":"x9"}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let json = r#"{}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.query(), None);
    }

    #[test]
    fn test_pages_is_ceiling_of_total_over_limit() {
        assert_eq!(Pagination::new(1, 10, 25).pages, 3);
        assert_eq!(Pagination::new(1, 10, 30).pages, 3);
        assert_eq!(Pagination::new(1, 10, 31).pages, 4);
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
        assert_eq!(Pagination::new(1, 10, 1).pages, 1);
    }

    #[test]
    fn test_list_result_serializes() {
        let result = ListResult {
            items: vec![1, 2, 3],
            pagination: Pagination::new(1, 10, 3),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""items":[1,2,3]"#));
        assert!(json.contains(r#""pages":1"#));
    }
}
