use dioxus::prelude::*;
use shared_types::{demo_identity, AppError, Identity, Role, Session, SessionChange};

/// Process-wide session, created once in `App` and shared by context.
///
/// The signal is private: every mutation goes through the pure [`Session`]
/// transitions below, and readers get a snapshot. Reads subscribe the
/// calling component, so transitions re-render whoever looked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStore {
    session: Signal<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::anonymous()),
        }
    }

    /// Current session state.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    /// Authenticate through the `login` server function. The session is left
    /// untouched when the call fails.
    pub async fn login(&mut self, email: String, password: String) -> Result<Identity, AppError> {
        tracing::info!(%email, "Login requested");
        let outcome = server::api::login(email, password).await;
        self.settle_login(outcome)
    }

    fn settle_login(
        &mut self,
        outcome: Result<Identity, ServerFnError>,
    ) -> Result<Identity, AppError> {
        match outcome {
            Ok(identity) => {
                self.install(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                let raw = e.to_string();
                let err = AppError::from_server_error(&raw)
                    .unwrap_or_else(|| AppError::internal(AppError::friendly_message(&raw)));
                tracing::warn!(kind = %err.kind, "Login failed");
                Err(err)
            }
        }
    }

    /// Clear the session. Calling this while anonymous is a no-op.
    pub fn logout(&mut self) -> SessionChange {
        let change = self.session.write().sign_out();
        match change {
            SessionChange::SignedOut => tracing::info!("Signed out"),
            _ => tracing::debug!("Logout ignored, no active session"),
        }
        change
    }

    /// Demo shortcut: sign in as the canned identity for `role`.
    pub fn select_role(&mut self, role: Role) -> Identity {
        let identity = demo_identity(role);
        self.install(identity.clone());
        identity
    }

    fn install(&mut self, identity: Identity) {
        let user_id = identity.id.clone();
        if let SessionChange::SignedIn(role) = self.session.write().sign_in(identity) {
            tracing::info!(%user_id, %role, "Session established");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session store provided by `App`.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{resolve_dashboard, AppErrorKind, DashboardView, RoleDestination};

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn select_role_routes_to_matching_dashboard() {
        fn app() -> Element {
            let mut store = use_hook(SessionStore::new);
            let landed = use_hook(move || {
                Role::ALL
                    .iter()
                    .map(|role| {
                        store.select_role(*role);
                        resolve_dashboard(store.identity().as_ref())
                            == RoleDestination::Dashboard(DashboardView::from(*role))
                    })
                    .all(|ok| ok)
            });
            let role = store.role().map(|r| r.to_string()).unwrap_or_default();
            rsx! {
                p { "landed={landed}" }
                p { "role={role}" }
            }
        }
        let html = render(app);
        assert!(html.contains("landed=true"));
        assert!(html.contains("role=admin"));
    }

    #[test]
    fn logout_twice_stays_anonymous() {
        fn app() -> Element {
            let mut store = use_hook(SessionStore::new);
            let changes = use_hook(move || {
                store.select_role(Role::Editor);
                let first = store.logout();
                let second = store.logout();
                format!("{first:?},{second:?}")
            });
            let authenticated = store.is_authenticated();
            rsx! {
                p { "{changes}" }
                p { "authenticated={authenticated}" }
            }
        }
        let html = render(app);
        assert!(html.contains("SignedOut,Unchanged"));
        assert!(html.contains("authenticated=false"));
    }

    #[test]
    fn failed_login_leaves_session_anonymous() {
        fn app() -> Element {
            let mut store = use_hook(SessionStore::new);
            let kind = use_hook(move || {
                let payload = serde_json::to_string(&AppError::validation(
                    "Please fill in all required fields",
                    Default::default(),
                ))
                .unwrap();
                match store.settle_login(Err(ServerFnError::new(payload))) {
                    Err(err) if err.kind == AppErrorKind::ValidationError => "validation",
                    Err(_) => "other",
                    Ok(_) => "ok",
                }
            });
            let anonymous = store.snapshot() == Session::anonymous();
            rsx! {
                p { "kind={kind}" }
                p { "anonymous={anonymous}" }
            }
        }
        let html = render(app);
        assert!(html.contains("kind=validation"));
        assert!(html.contains("anonymous=true"));
    }

    #[test]
    fn unreadable_failure_falls_back_to_generic_message() {
        fn app() -> Element {
            let mut store = use_hook(SessionStore::new);
            let message = use_hook(move || {
                match store.settle_login(Err(ServerFnError::new("connection reset"))) {
                    Err(err) => err.message,
                    Ok(_) => String::new(),
                }
            });
            rsx! { p { "{message}" } }
        }
        assert!(render(app).contains("Login failed. Please try again."));
    }

    #[test]
    fn successful_login_installs_identity() {
        fn app() -> Element {
            let mut store = use_hook(SessionStore::new);
            let id = use_hook(move || {
                store
                    .settle_login(Ok(demo_identity(Role::Writer)))
                    .map(|identity| identity.id)
                    .unwrap_or_default()
            });
            let role = store.role().map(|r| r.to_string()).unwrap_or_default();
            rsx! {
                p { "id={id}" }
                p { "role={role}" }
            }
        }
        let html = render(app);
        assert!(html.contains("id=w1"));
        assert!(html.contains("role=writer"));
    }
}
