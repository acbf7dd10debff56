use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

/// Rebuild the unmatched path from the catch-all segments.
pub fn unmatched_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Fallback for every unmatched path, including menu entries without a page.
///
/// Guests are offered the login page instead of a dashboard they cannot open.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let session = use_session();
    let path = unmatched_path(&route);
    tracing::debug!(%path, "No route matched");

    let (target, link_label) = if session.is_authenticated() {
        (Route::Dashboard {}, "Return to Dashboard")
    } else {
        (Route::Login {}, "Go to Sign In")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        section { class: "not-found-page",
            div { class: "not-found-card",
                span { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here yet" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of Script Master."
                }
                Link { to: target, class: "not-found-link", "{link_label}" }
            }
        }
    }
}
