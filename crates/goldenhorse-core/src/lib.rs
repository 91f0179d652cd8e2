//! # Golden Horse Core
//!
//! Core types and utilities shared across the Golden Horse API:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`envelope`]: The uniform `{ success, data, message }` response wrapper
//! - [`pagination`]: List query parameters and pagination metadata
//! - [`serde`]: Custom serde helpers for lenient query-string parsing
//!
//! # Example
//!
//! ```ignore
//! use goldenhorse_core::{ApiResponse, AppError, ListParams};
//!
//! // Wrap a payload in the standard envelope
//! let response = ApiResponse::ok(contact);
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Contact not found"));
//!
//! // Resolve pagination inputs
//! let params = ListParams::default();
//! let offset = params.offset();
//! ```

pub mod envelope;
pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use envelope::ApiResponse;
pub use errors::AppError;
pub use pagination::{ListParams, ListResult, Pagination};
