//! Route access rules and role-based dashboard dispatch.

use crate::models::{Identity, Role};
use crate::session::Session;

/// Entry point every redirect targets.
pub const LOGIN_PATH: &str = "/login";

/// Whether a route requires an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: RouteAccess,
}

/// Path used by the catch-all not-found route.
pub const FALLBACK_PATH: &str = "*";

/// Every navigable route. The fallback matches anything not listed.
pub const ROUTE_TABLE: &[RouteSpec] = &[
    RouteSpec {
        path: LOGIN_PATH,
        access: RouteAccess::Public,
    },
    RouteSpec {
        path: "/signup",
        access: RouteAccess::Public,
    },
    RouteSpec {
        path: "/",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: "/upload",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: "/my-scripts",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: "/messages",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: "/assignments",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: "/live-edits",
        access: RouteAccess::Protected,
    },
    RouteSpec {
        path: FALLBACK_PATH,
        access: RouteAccess::Public,
    },
];

/// Access rule for `path`. Unlisted paths fall through to the public fallback.
pub fn route_access(path: &str) -> RouteAccess {
    ROUTE_TABLE
        .iter()
        .find(|spec| spec.path == path)
        .map(|spec| spec.access)
        .unwrap_or(RouteAccess::Public)
}

/// Paths that require a session.
pub fn protected_paths() -> impl Iterator<Item = &'static str> {
    ROUTE_TABLE
        .iter()
        .filter(|spec| spec.access == RouteAccess::Protected)
        .map(|spec| spec.path)
}

/// What to do with a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    /// The requested destination is dropped; login does not return to it.
    RedirectToLogin,
}

/// Decide whether `requested` may render for `session`.
pub fn guard(session: &Session, requested: &str) -> AccessDecision {
    match route_access(requested) {
        RouteAccess::Public => AccessDecision::Render,
        RouteAccess::Protected if session.is_authenticated() => AccessDecision::Render,
        RouteAccess::Protected => AccessDecision::RedirectToLogin,
    }
}

/// Home dashboard for each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Writer,
    Editor,
    Admin,
}

impl From<Role> for DashboardView {
    fn from(role: Role) -> Self {
        match role {
            Role::Writer => DashboardView::Writer,
            Role::Editor => DashboardView::Editor,
            Role::Admin => DashboardView::Admin,
        }
    }
}

/// Where the role router sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleDestination {
    Dashboard(DashboardView),
    Login,
}

/// Resolve the home dashboard for the signed-in identity, or login if none.
pub fn resolve_dashboard(identity: Option<&Identity>) -> RoleDestination {
    match identity {
        Some(identity) => RoleDestination::Dashboard(identity.role.into()),
        None => RoleDestination::Login,
    }
}

/// Resolve a raw role claim. Values outside the known roles go to login.
pub fn resolve_role_claim(claim: &str) -> RoleDestination {
    match Role::parse(claim) {
        Some(role) => RoleDestination::Dashboard(role.into()),
        None => RoleDestination::Login,
    }
}
