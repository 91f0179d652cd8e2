//! Generic paginated listing.
//!
//! One function translates a resource's search term, filters, and
//! pagination into a count query plus a page query. Every list endpoint
//! calls this instead of assembling its own SQL.

use goldenhorse_core::{AppError, ListParams, ListResult, Pagination};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::filter::{FieldFilter, ResourceTable, push_filters};

/// Fetches one page of a resource, with the total count for pagination
/// metadata.
///
/// Both queries get the same WHERE clause; `skip = (page - 1) * limit`.
#[instrument(skip(db, filters), fields(table = spec.table))]
pub async fn fetch_page<T>(
    db: &PgPool,
    spec: &ResourceTable,
    params: &ListParams,
    filters: &[FieldFilter],
) -> Result<ListResult<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let page = params.page();
    let limit = params.limit();
    let offset = params.offset();
    let search = params.query();

    let mut count_query =
        QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", spec.table));
    push_filters(&mut count_query, search, spec.search_columns, filters);
    let total: i64 = count_query
        .build_query_scalar()
        .fetch_one(db)
        .await?;

    let mut page_query =
        QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {}", spec.select, spec.table));
    push_filters(&mut page_query, search, spec.search_columns, filters);
    page_query.push(" ORDER BY ");
    page_query.push(spec.default_order);
    page_query.push(" LIMIT ");
    page_query.push_bind(limit);
    page_query.push(" OFFSET ");
    page_query.push_bind(offset);

    let items = page_query.build_query_as::<T>().fetch_all(db).await?;

    Ok(ListResult {
        items,
        pagination: Pagination::new(page, limit, total),
    })
}
