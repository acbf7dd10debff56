use pretty_assertions::assert_eq;
use server::error_convert::{AppErrorExt, ValidateRequest};
use shared_types::{
    demo_identity, guard, navigation_for, resolve_dashboard, AccessDecision, AppError,
    AppErrorKind, DashboardView, LoginRequest, Role, RoleDestination, Session, SessionChange,
};

use crate::common;

#[tokio::test]
async fn login_server_fn_signs_in_with_demo_role() {
    let identity = server::api::login("a@b.com".into(), "x".into())
        .await
        .unwrap();
    assert_eq!(identity.role, Role::Writer);

    let mut session = Session::anonymous();
    session.sign_in(identity);
    assert!(session.is_authenticated());
    assert_eq!(
        resolve_dashboard(session.identity()),
        RoleDestination::Dashboard(DashboardView::Writer)
    );
}

#[tokio::test]
async fn login_server_fn_rejects_empty_fields() {
    let started = std::time::Instant::now();
    let err = server::api::login(String::new(), String::new())
        .await
        .unwrap_err();
    // Rejected before the simulated latency.
    let configured = server::config::app_config().demo.login_delay_ms;
    assert!((started.elapsed().as_millis() as u64) < configured);
    let recovered = AppError::from_server_error(&err.to_string()).unwrap();
    assert_eq!(recovered.kind, AppErrorKind::ValidationError);
    assert!(recovered.field_errors.contains_key("email"));
    assert!(recovered.field_errors.contains_key("password"));
}

#[tokio::test]
async fn login_server_fn_waits_for_configured_delay() {
    let started = std::time::Instant::now();
    server::api::login("a@b.com".into(), "x".into())
        .await
        .unwrap();
    let configured = server::config::app_config().demo.login_delay_ms;
    assert!(started.elapsed().as_millis() as u64 >= configured);
}

#[tokio::test]
async fn demo_login_authenticates_with_configured_role() {
    let authenticator = common::instant_authenticator(Role::Writer);
    let identity = authenticator.authenticate("a@b.com", "x").await.unwrap();

    let mut session = Session::anonymous();
    assert_eq!(session.sign_in(identity), SessionChange::SignedIn(Role::Writer));

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Writer));
    assert_eq!(
        resolve_dashboard(session.identity()),
        RoleDestination::Dashboard(DashboardView::Writer)
    );
    assert_eq!(guard(&session, "/my-scripts"), AccessDecision::Render);
}

#[tokio::test]
async fn demo_login_ignores_credentials() {
    let authenticator = common::instant_authenticator(Role::Editor);
    let first = authenticator.authenticate("a@b.com", "x").await.unwrap();
    let second = authenticator
        .authenticate("someone@else.org", "different")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, demo_identity(Role::Editor));
}

#[tokio::test]
async fn editor_login_lands_with_editor_menu() {
    let authenticator = common::instant_authenticator(Role::Editor);
    let identity = authenticator.authenticate("mark@example.com", "pw").await.unwrap();

    let menu = navigation_for(identity.role, "/");
    let paths: Vec<&str> = menu.iter().map(|i| i.entry.path).collect();
    assert_eq!(paths, vec!["/", "/messages", "/assignments", "/settings"]);
}

#[test]
fn empty_credentials_fail_validation_before_authenticating() {
    let req = LoginRequest {
        email: String::new(),
        password: String::new(),
    };
    let err = req.validate_request().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "Please fill in all required fields");
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
}

#[test]
fn validation_error_survives_server_fn_transport() {
    let req = LoginRequest {
        email: "a@b.com".into(),
        password: String::new(),
    };
    let server_err = req.validate_request().unwrap_err().into_server_fn_error();

    let recovered = AppError::from_server_error(&server_err.to_string()).unwrap();
    assert_eq!(recovered.kind, AppErrorKind::ValidationError);
    assert!(recovered.field_errors.contains_key("password"));
    assert!(!recovered.field_errors.contains_key("email"));
}
