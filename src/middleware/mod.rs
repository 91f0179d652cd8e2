//! Middleware modules for request processing.
//!
//! Authentication itself is handled by an upstream proxy; the middleware
//! here only enforces role requirements based on the identity headers
//! that proxy forwards.
//!
//! # Modules
//!
//! - [`role`]: Role-guard middleware reading the `x-user-role` header

pub mod role;
