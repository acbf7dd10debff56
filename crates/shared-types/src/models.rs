use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role controlling which views and menu entries a user sees.
///
/// - `Writer`: uploads scripts and follows their progress.
/// - `Editor`: works through assigned manuscripts.
/// - `Admin`: oversees the whole publishing pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Writer,
    Editor,
    Admin,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 3] = [Role::Writer, Role::Editor, Role::Admin];

    /// Parse a role claim. Unknown values yield `None` rather than a default,
    /// so callers decide how to treat an unresolvable role.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "writer" => Some(Role::Writer),
            "editor" => Some(Role::Editor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Lowercase string for storage and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Writer => "writer",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Capitalised name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Writer => "Writer",
            Role::Editor => "Editor",
            Role::Admin => "Admin",
        }
    }

    /// Single-letter mark shown in the sidebar badge.
    pub fn initial(&self) -> char {
        match self {
            Role::Writer => 'W',
            Role::Editor => 'E',
            Role::Admin => 'A',
        }
    }

    /// CSS class carrying the role's accent color.
    pub fn color_class(&self) -> &'static str {
        match self {
            Role::Writer => "role-writer",
            Role::Editor => "role-editor",
            Role::Admin => "role-admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user. The role is fixed when the identity is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    /// Letter shown when no avatar image is available.
    pub fn fallback_initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Canned identity for a role, used by the demo role picker and by demo login.
pub fn demo_identity(role: Role) -> Identity {
    let (id, name, email, img) = match role {
        Role::Writer => ("w1", "Sarah Johnson", "sarah@example.com", 32),
        Role::Editor => ("e1", "Mark Davis", "mark@example.com", 61),
        Role::Admin => ("a1", "Priya Sharma", "priya@example.com", 48),
    };
    Identity {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: Some(format!("https://i.pravatar.cc/150?img={img}")),
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Signup request collected by the public signup form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignupRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}
