use std::env;

/// Role names as forwarded by the upstream auth proxy.
///
/// # Environment Variables
///
/// - `ADMIN_ROLE`: role allowed on administrative routes (default: `admin`)
/// - `STAFF_ROLE`: role allowed on regular write routes (default: `staff`)
#[derive(Clone, Debug)]
pub struct RoleConfig {
    pub admin: String,
    pub staff: String,
}

impl RoleConfig {
    pub fn from_env() -> Self {
        Self {
            admin: env::var("ADMIN_ROLE").unwrap_or_else(|_| "admin".to_string()),
            staff: env::var("STAFF_ROLE").unwrap_or_else(|_| "staff".to_string()),
        }
    }
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            admin: "admin".to_string(),
            staff: "staff".to_string(),
        }
    }
}
