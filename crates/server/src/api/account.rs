use dioxus::prelude::*;
use shared_types::Identity;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Sign in with email and password.
///
/// Demo mode accepts any non-empty credentials: after the configured delay it
/// returns the canned identity for the configured role.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<Identity, ServerFnError> {
    use crate::auth::DemoAuthenticator;
    use shared_types::LoginRequest;

    let req = LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let authenticator = DemoAuthenticator::from_config(&crate::config::app_config().demo);
    authenticator
        .authenticate(&req.email, &req.password)
        .await
        .map_err(|e| e.into_server_fn_error())
}
