use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Default simulated login latency.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Demo-mode behaviour of the session backend.
///
/// Loaded from the `[demo]` table of `config.toml`. Every field has a
/// default, so a missing or partial file still yields a working demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// How long `login` waits before resolving.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Role assigned to every password login.
    #[serde(default = "default_login_role")]
    pub login_role: Role,
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_login_role() -> Role {
    Role::Writer
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            login_role: default_login_role(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}
