//! Configuration modules for the Golden Horse API.
//!
//! Each submodule handles a specific aspect of configuration, loaded
//! once at startup from environment variables with hardcoded fallbacks.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`roles`]: Role names expected in the upstream proxy's headers
//! - [`thresholds`]: Default numeric thresholds for settings lookups

pub mod cors;
pub mod roles;
pub mod thresholds;
