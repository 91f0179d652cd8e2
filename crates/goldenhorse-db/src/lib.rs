//! # Golden Horse DB
//!
//! Database pool and the generic resource-query layer for the Golden
//! Horse API.
//!
//! Every list endpoint in the application goes through the same shape:
//! free-text search OR-combined over a fixed set of text columns, exact
//! and range filters AND-combined on top, pagination with a total count.
//! Rather than repeating that per resource, each resource declares a
//! [`filter::ResourceTable`] (table, select list, searchable columns,
//! ordering) and hands its filters to [`listing::fetch_page`].
//!
//! # Example
//!
//! ```ignore
//! use goldenhorse_db::filter::{FieldFilter, ResourceTable};
//! use goldenhorse_db::listing::fetch_page;
//!
//! const CONTACTS: ResourceTable = ResourceTable {
//!     table: "contacts",
//!     select: "id, name, email, phone, company, status, created_at, updated_at",
//!     search_columns: &["name", "email", "phone", "company"],
//!     default_order: "created_at DESC",
//! };
//!
//! let filters = vec![FieldFilter::equals_text("status", "active")];
//! let page = fetch_page::<Contact>(&pool, &CONTACTS, &params, &filters).await?;
//! ```

pub mod filter;
pub mod listing;

use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable.
/// The returned pool is cheaply cloneable and is held in application
/// state for use in request handlers.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails. This
/// runs once at startup, before the server accepts traffic.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
