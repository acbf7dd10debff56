use serde::{Deserialize, Serialize};

use crate::models::{Identity, Role};

/// The current optional identity. Anonymous at startup and after sign-out.
///
/// Only the session store mutates a `Session`; every other component reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    identity: Option<Identity>,
}

/// Outcome of a session transition, used for logging and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    SignedIn(Role),
    SignedOut,
    Unchanged,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Install `identity`, replacing whoever was signed in before.
    pub fn sign_in(&mut self, identity: Identity) -> SessionChange {
        let role = identity.role;
        self.identity = Some(identity);
        SessionChange::SignedIn(role)
    }

    /// Clear the identity. Signing out an anonymous session is a no-op.
    pub fn sign_out(&mut self) -> SessionChange {
        match self.identity.take() {
            Some(_) => SessionChange::SignedOut,
            None => SessionChange::Unchanged,
        }
    }
}
