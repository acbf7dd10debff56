use pretty_assertions::assert_eq;
use shared_types::{guard, protected_paths, AccessDecision, Role, Session};

use crate::common;

#[test]
fn anonymous_visitor_is_redirected_from_every_protected_path() {
    let session = Session::anonymous();
    let redirected: Vec<&str> = protected_paths()
        .filter(|path| guard(&session, path) == AccessDecision::RedirectToLogin)
        .collect();
    assert_eq!(redirected, protected_paths().collect::<Vec<_>>());
}

#[test]
fn every_role_renders_every_protected_path() {
    for role in Role::ALL {
        let session = common::signed_in(role);
        for path in protected_paths() {
            assert_eq!(guard(&session, path), AccessDecision::Render, "{role} {path}");
        }
    }
}

#[test]
fn protected_paths_are_not_role_gated() {
    // Writers can open editor pages by typing the path; only the menu is scoped.
    let session = common::signed_in(Role::Writer);
    assert_eq!(guard(&session, "/assignments"), AccessDecision::Render);
}

#[test]
fn public_and_unknown_paths_render_for_anonymous_visitors() {
    let session = Session::anonymous();
    for path in ["/login", "/signup", "/reports", "/does/not/exist"] {
        assert_eq!(guard(&session, path), AccessDecision::Render, "{path}");
    }
}

#[test]
fn signing_out_restores_the_redirect() {
    let mut session = common::signed_in(Role::Editor);
    assert_eq!(guard(&session, "/"), AccessDecision::Render);
    session.sign_out();
    assert_eq!(guard(&session, "/"), AccessDecision::RedirectToLogin);
}
