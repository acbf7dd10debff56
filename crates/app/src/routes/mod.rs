pub mod assignments;
pub mod dashboard;
pub mod live_edits;
pub mod login;
pub mod messages;
pub mod my_scripts;
pub mod nav;
pub mod not_found;
pub mod signup;
pub mod upload;

use dioxus::prelude::*;
use shared_types::{guard, AccessDecision};
use shared_ui::SidebarInset;

use crate::session::use_session;

use assignments::Assignments;
use dashboard::Dashboard;
use live_edits::LiveEdits;
use login::Login;
use messages::Messages;
use my_scripts::MyScripts;
use nav::NavMenu;
use not_found::NotFound;
use signup::Signup;
use upload::UploadScript;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/upload")]
    UploadScript {},
    #[route("/my-scripts")]
    MyScripts {},
    #[route("/messages")]
    Messages {},
    #[route("/assignments")]
    Assignments {},
    #[route("/live-edits")]
    LiveEdits {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: anonymous visitors are sent to /login.
///
/// The requested destination is not remembered, so a successful login always
/// lands on the dashboard.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let route: Route = use_route();
    let path = route.to_string();

    let decision = guard(&session.snapshot(), &path);
    match decision {
        AccessDecision::Render => rsx! { Outlet::<Route> {} },
        AccessDecision::RedirectToLogin => {
            tracing::debug!(%path, "Anonymous visit to protected route");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

/// Main app layout: role-scoped sidebar beside the page content.
#[component]
fn AppLayout() -> Element {
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            NavMenu { session }
            SidebarInset { class: "app-content",
                div { class: "app-page",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{protected_paths, route_access, RouteAccess};

    #[test]
    fn protected_routes_render_their_table_paths() {
        let rendered: Vec<String> = [
            Route::Dashboard {},
            Route::UploadScript {},
            Route::MyScripts {},
            Route::Messages {},
            Route::Assignments {},
            Route::LiveEdits {},
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        let table: Vec<String> = protected_paths().map(str::to_string).collect();
        assert_eq!(rendered, table);
    }

    #[test]
    fn public_routes_are_not_guarded() {
        assert_eq!(route_access(&Route::Login {}.to_string()), RouteAccess::Public);
        assert_eq!(route_access(&Route::Signup {}.to_string()), RouteAccess::Public);
    }

    #[test]
    fn unknown_paths_parse_to_not_found() {
        let route: Route = "/reports".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["reports".to_string()]
            }
        );
    }
}
