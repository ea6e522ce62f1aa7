//! Initial staff account configuration.

use serde::{Deserialize, Serialize};

/// Account enrolled at startup when the staff table is empty.
///
/// Every staff endpoint except login requires a token, so a fresh
/// deployment needs one account created out of band. Leaving `email`
/// empty disables seeding.
#[derive(Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Login email of the initial account.
    #[serde(default)]
    pub email: String,
    /// Initial password. Required when `email` is set.
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_first_name")]
    pub first_name: String,
    #[serde(default = "default_last_name")]
    pub last_name: String,
    #[serde(default = "default_store_id")]
    pub store_id: i32,
    /// Manager id recorded for the initial account. Defaults to 1, the id
    /// a fresh table hands out first, so the account manages itself.
    #[serde(default = "default_manager_id")]
    pub manager_id: i32,
}

impl BootstrapConfig {
    /// Whether an initial account is configured.
    pub fn is_enabled(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

impl std::fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("store_id", &self.store_id)
            .field("manager_id", &self.manager_id)
            .finish()
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            first_name: default_first_name(),
            last_name: default_last_name(),
            store_id: default_store_id(),
            manager_id: default_manager_id(),
        }
    }
}

fn default_first_name() -> String {
    "Store".to_string()
}

fn default_last_name() -> String {
    "Administrator".to_string()
}

fn default_store_id() -> i32 {
    1
}

fn default_manager_id() -> i32 {
    1
}
