use pretty_assertions::assert_eq;
use shared_types::{
    demo_identity, resolve_dashboard, DashboardView, Role, RoleDestination, Session,
    SessionChange,
};

use crate::common;

#[test]
fn logout_twice_leaves_session_anonymous() {
    let mut session = common::signed_in(Role::Admin);

    assert_eq!(session.sign_out(), SessionChange::SignedOut);
    assert_eq!(session.sign_out(), SessionChange::Unchanged);
    assert!(!session.is_authenticated());
    assert_eq!(session, Session::anonymous());
}

#[test]
fn selecting_a_role_routes_to_its_dashboard() {
    let expected = [
        (Role::Writer, DashboardView::Writer),
        (Role::Editor, DashboardView::Editor),
        (Role::Admin, DashboardView::Admin),
    ];
    for (role, view) in expected {
        let session = common::signed_in(role);
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(role));
        assert_eq!(
            resolve_dashboard(session.identity()),
            RoleDestination::Dashboard(view)
        );
    }
}

#[test]
fn switching_roles_replaces_the_identity() {
    let mut session = common::signed_in(Role::Writer);
    let change = session.sign_in(demo_identity(Role::Editor));

    assert_eq!(change, SessionChange::SignedIn(Role::Editor));
    assert_eq!(session.identity(), Some(&demo_identity(Role::Editor)));
}

#[test]
fn anonymous_session_resolves_to_login() {
    let session = Session::anonymous();
    assert_eq!(resolve_dashboard(session.identity()), RoleDestination::Login);
}
