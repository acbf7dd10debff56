pub mod admin;
pub mod editor;
pub mod writer;

use dioxus::prelude::*;
use shared_types::{resolve_dashboard, DashboardView, RoleDestination};

use crate::routes::Route;
use crate::session::use_session;

/// Role-adaptive dashboard: renders the home view for the signed-in role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let identity = session.identity();

    match resolve_dashboard(identity.as_ref()) {
        RoleDestination::Dashboard(DashboardView::Writer) => {
            rsx! { writer::WriterDashboard { session } }
        }
        RoleDestination::Dashboard(DashboardView::Editor) => {
            rsx! { editor::EditorDashboard { session } }
        }
        RoleDestination::Dashboard(DashboardView::Admin) => {
            rsx! { admin::AdminDashboard { session } }
        }
        RoleDestination::Login => {
            navigator().replace(Route::Login {});
            rsx! {}
        }
    }
}
