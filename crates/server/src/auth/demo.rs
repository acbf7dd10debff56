use std::time::Duration;

use shared_types::{demo_identity, AppError, DemoConfig, Identity, Role};

/// Stand-in credential check used until a real identity provider exists.
///
/// Accepts any credentials, waits for the configured latency, and resolves
/// to the canned identity for the configured role.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAuthenticator {
    delay: Duration,
    role: Role,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration, role: Role) -> Self {
        Self { delay, role }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(
            Duration::from_millis(config.login_delay_ms),
            config.login_role,
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The password is accepted unread.
    pub async fn authenticate(&self, email: &str, _password: &str) -> Result<Identity, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let identity = demo_identity(self.role);
        tracing::info!(email, role = %identity.role, user_id = %identity.id, "Demo login accepted");
        Ok(identity)
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}
