//! Tagged filter predicates and SQL translation.
//!
//! Filters are an explicit sum type rather than ad-hoc `where` maps: a
//! resource builds a list of [`FieldFilter`]s from its validated query
//! parameters and one translation function renders them into a
//! parameterized WHERE clause. Column names always come from `&'static`
//! per-resource configuration, never from request input.

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// A typed value for equality comparison.
#[derive(Debug, Clone)]
pub enum FilterValue {
    Text(String),
    Uuid(Uuid),
    Int(i64),
    Bool(bool),
}

/// Supported predicate kinds.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Case-insensitive substring match (`ILIKE '%…%'`).
    Contains(String),
    /// Exact equality.
    Equals(FilterValue),
    /// Inclusive numeric range; either bound may be open.
    Between { min: Option<f64>, max: Option<f64> },
}

/// One column predicate.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub column: &'static str,
    pub predicate: Predicate,
}

impl FieldFilter {
    pub fn contains(column: &'static str, needle: impl Into<String>) -> Self {
        Self {
            column,
            predicate: Predicate::Contains(needle.into()),
        }
    }

    pub fn equals_text(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            predicate: Predicate::Equals(FilterValue::Text(value.into())),
        }
    }

    pub fn equals_uuid(column: &'static str, value: Uuid) -> Self {
        Self {
            column,
            predicate: Predicate::Equals(FilterValue::Uuid(value)),
        }
    }

    pub fn equals_int(column: &'static str, value: i64) -> Self {
        Self {
            column,
            predicate: Predicate::Equals(FilterValue::Int(value)),
        }
    }

    pub fn equals_bool(column: &'static str, value: bool) -> Self {
        Self {
            column,
            predicate: Predicate::Equals(FilterValue::Bool(value)),
        }
    }

    pub fn between(column: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            column,
            predicate: Predicate::Between { min, max },
        }
    }
}

/// Per-resource query configuration.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTable {
    pub table: &'static str,
    pub select: &'static str,
    /// Columns the free-text search matches against, OR-combined.
    pub search_columns: &'static [&'static str],
    pub default_order: &'static str,
}

/// Tracks whether the next clause needs `WHERE` or `AND`.
struct ClauseSep {
    first: bool,
}

impl ClauseSep {
    fn new() -> Self {
        Self { first: true }
    }

    fn push(&mut self, qb: &mut QueryBuilder<'_, Postgres>) {
        if self.first {
            qb.push(" WHERE ");
            self.first = false;
        } else {
            qb.push(" AND ");
        }
    }
}

/// Appends the WHERE clause for a search term plus a filter list.
///
/// The search term is OR-combined across `search_columns`; each filter is
/// AND-combined. An absent or empty search term adds no clause (an empty
/// substring would match every row anyway).
pub fn push_filters(
    qb: &mut QueryBuilder<'_, Postgres>,
    search: Option<&str>,
    search_columns: &[&str],
    filters: &[FieldFilter],
) {
    let mut sep = ClauseSep::new();

    if let Some(term) = search.filter(|t| !t.is_empty())
        && !search_columns.is_empty()
    {
        let pattern = format!("%{}%", term);
        sep.push(qb);
        qb.push("(");
        for (i, column) in search_columns.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push(*column);
            qb.push(" ILIKE ");
            qb.push_bind(pattern.clone());
        }
        qb.push(")");
    }

    for filter in filters {
        match &filter.predicate {
            Predicate::Contains(needle) => {
                sep.push(qb);
                qb.push(filter.column);
                qb.push(" ILIKE ");
                qb.push_bind(format!("%{}%", needle));
            }
            Predicate::Equals(value) => {
                sep.push(qb);
                qb.push(filter.column);
                qb.push(" = ");
                match value {
                    FilterValue::Text(v) => qb.push_bind(v.clone()),
                    FilterValue::Uuid(v) => qb.push_bind(*v),
                    FilterValue::Int(v) => qb.push_bind(*v),
                    FilterValue::Bool(v) => qb.push_bind(*v),
                };
            }
            Predicate::Between { min, max } => {
                if let Some(min) = min {
                    sep.push(qb);
                    qb.push(filter.column);
                    qb.push(" >= ");
                    qb.push_bind(*min);
                }
                if let Some(max) = max {
                    sep.push(qb);
                    qb.push(filter.column);
                    qb.push(" <= ");
                    qb.push_bind(*max);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(search: Option<&str>, columns: &[&str], filters: &[FieldFilter]) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM t");
        push_filters(&mut qb, search, columns, filters);
        qb.sql().to_string()
    }

    #[test]
    fn test_no_search_no_filters_adds_no_clause() {
        assert_eq!(rendered(None, &["name"], &[]), "SELECT * FROM t");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert_eq!(rendered(Some(""), &["name"], &[]), "SELECT * FROM t");
    }

    #[test]
    fn test_search_or_combines_columns() {
        let sql = rendered(Some("horse"), &["name", "email"], &[]);
        assert_eq!(
            sql,
            "SELECT * FROM t WHERE (name ILIKE $1 OR email ILIKE $2)"
        );
    }

    #[test]
    fn test_filters_and_combine() {
        let filters = vec![
            FieldFilter::equals_text("status", "active"),
            FieldFilter::equals_int("priority", 2),
        ];
        let sql = rendered(None, &[], &filters);
        assert_eq!(sql, "SELECT * FROM t WHERE status = $1 AND priority = $2");
    }

    #[test]
    fn test_search_and_filters_combine() {
        let filters = vec![FieldFilter::equals_text("status", "active")];
        let sql = rendered(Some("gh"), &["name"], &filters);
        assert_eq!(
            sql,
            "SELECT * FROM t WHERE (name ILIKE $1) AND status = $2"
        );
    }

    #[test]
    fn test_between_renders_present_bounds_only() {
        let sql = rendered(
            None,
            &[],
            &[FieldFilter::between("amount", Some(100.0), Some(500.0))],
        );
        assert_eq!(sql, "SELECT * FROM t WHERE amount >= $1 AND amount <= $2");

        let sql = rendered(None, &[], &[FieldFilter::between("amount", None, Some(500.0))]);
        assert_eq!(sql, "SELECT * FROM t WHERE amount <= $1");

        let sql = rendered(None, &[], &[FieldFilter::between("amount", None, None)]);
        assert_eq!(sql, "SELECT * FROM t");
    }

    #[test]
    fn test_contains_filter() {
        let sql = rendered(None, &[], &[FieldFilter::contains("city", "Cairo")]);
        assert_eq!(sql, "SELECT * FROM t WHERE city ILIKE $1");
    }
}
