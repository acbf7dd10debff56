//! Role-scoped sidebar navigation.
//!
//! The entry table is static. [`compose_navigation`] filters it for a role,
//! keeps declaration order, and marks the entry whose path equals the
//! current location.

use crate::models::Role;

/// Icon reference for a navigation entry. Rendering maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    LayoutDashboard,
    Upload,
    BookOpen,
    MessageSquare,
    FileText,
    Folder,
    Users,
    Activity,
    Settings,
}

/// Section an entry belongs to. Sections appear in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NavGroup {
    Base,
    Writer,
    Editor,
    Admin,
    Settings,
}

/// A static, role-scoped menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub group: NavGroup,
    pub allowed_roles: &'static [Role],
}

impl NavigationEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Writer, Role::Editor, Role::Admin];

/// Every menu entry in declaration order.
pub const NAVIGATION_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry {
        path: "/",
        label: "Dashboard",
        icon: NavIcon::LayoutDashboard,
        group: NavGroup::Base,
        allowed_roles: ALL_ROLES,
    },
    NavigationEntry {
        path: "/upload",
        label: "Upload Script",
        icon: NavIcon::Upload,
        group: NavGroup::Writer,
        allowed_roles: &[Role::Writer],
    },
    NavigationEntry {
        path: "/my-scripts",
        label: "My Scripts",
        icon: NavIcon::BookOpen,
        group: NavGroup::Writer,
        allowed_roles: &[Role::Writer],
    },
    // Listed with the writer group but shared with editors.
    NavigationEntry {
        path: "/messages",
        label: "Messages",
        icon: NavIcon::MessageSquare,
        group: NavGroup::Writer,
        allowed_roles: &[Role::Writer, Role::Editor],
    },
    NavigationEntry {
        path: "/assignments",
        label: "Assignments",
        icon: NavIcon::FileText,
        group: NavGroup::Editor,
        allowed_roles: &[Role::Editor],
    },
    NavigationEntry {
        path: "/manuscripts",
        label: "Manuscripts",
        icon: NavIcon::Folder,
        group: NavGroup::Admin,
        allowed_roles: &[Role::Admin],
    },
    NavigationEntry {
        path: "/editors",
        label: "Editors",
        icon: NavIcon::Users,
        group: NavGroup::Admin,
        allowed_roles: &[Role::Admin],
    },
    NavigationEntry {
        path: "/reports",
        label: "Reports",
        icon: NavIcon::Activity,
        group: NavGroup::Admin,
        allowed_roles: &[Role::Admin],
    },
    NavigationEntry {
        path: "/settings",
        label: "Settings",
        icon: NavIcon::Settings,
        group: NavGroup::Settings,
        allowed_roles: ALL_ROLES,
    },
];

/// A navigation entry annotated for the current location. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNavigationEntry {
    pub entry: NavigationEntry,
    pub is_active: bool,
}

/// Filter `entries` for `role`, preserving order, and mark the active one.
///
/// Matching is exact string equality: `/assignments/3` does not activate
/// `/assignments`.
pub fn compose_navigation(
    entries: &[NavigationEntry],
    role: Role,
    location: &str,
) -> Vec<ActiveNavigationEntry> {
    entries
        .iter()
        .filter(|entry| entry.allows(role))
        .map(|entry| ActiveNavigationEntry {
            entry: *entry,
            is_active: entry.path == location,
        })
        .collect()
}

/// [`compose_navigation`] over [`NAVIGATION_ENTRIES`].
pub fn navigation_for(role: Role, location: &str) -> Vec<ActiveNavigationEntry> {
    compose_navigation(NAVIGATION_ENTRIES, role, location)
}

/// Presentation state of the sidebar. Affects width and label visibility only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn toggled(self) -> Self {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, SidebarMode::Collapsed)
    }

    pub fn width_px(self) -> u16 {
        match self {
            SidebarMode::Expanded => 240,
            SidebarMode::Collapsed => 80,
        }
    }

    pub fn shows_labels(self) -> bool {
        !self.is_collapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(items: &[ActiveNavigationEntry]) -> Vec<&'static str> {
        items.iter().map(|i| i.entry.path).collect()
    }

    #[test]
    fn writer_menu() {
        let menu = navigation_for(Role::Writer, "/");
        assert_eq!(
            paths(&menu),
            vec!["/", "/upload", "/my-scripts", "/messages", "/settings"]
        );
    }

    #[test]
    fn editor_menu() {
        let menu = navigation_for(Role::Editor, "/");
        assert_eq!(paths(&menu), vec!["/", "/messages", "/assignments", "/settings"]);
    }

    #[test]
    fn admin_menu() {
        let menu = navigation_for(Role::Admin, "/");
        assert_eq!(
            paths(&menu),
            vec!["/", "/manuscripts", "/editors", "/reports", "/settings"]
        );
    }

    #[test]
    fn menu_is_exactly_the_allowed_entries() {
        for role in Role::ALL {
            let menu = navigation_for(role, "/");
            let expected: Vec<&str> = NAVIGATION_ENTRIES
                .iter()
                .filter(|e| e.allowed_roles.contains(&role))
                .map(|e| e.path)
                .collect();
            assert_eq!(paths(&menu), expected, "role {role}");
        }
    }

    #[test]
    fn groups_are_declared_in_section_order() {
        let groups: Vec<NavGroup> = NAVIGATION_ENTRIES.iter().map(|e| e.group).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
        assert_eq!(NAVIGATION_ENTRIES.first().map(|e| e.path), Some("/"));
        assert_eq!(NAVIGATION_ENTRIES.last().map(|e| e.path), Some("/settings"));
    }

    #[test]
    fn editor_on_assignments_marks_only_assignments_active() {
        let menu = navigation_for(Role::Editor, "/assignments");
        for item in &menu {
            assert_eq!(item.is_active, item.entry.path == "/assignments");
        }
        assert_eq!(menu.iter().filter(|i| i.is_active).count(), 1);
    }

    #[test]
    fn sub_paths_do_not_activate_parent() {
        let menu = navigation_for(Role::Editor, "/assignments/2");
        assert!(menu.iter().all(|i| !i.is_active));
    }

    #[test]
    fn location_outside_role_menu_activates_nothing() {
        let menu = navigation_for(Role::Writer, "/assignments");
        assert!(menu.iter().all(|i| !i.is_active));
    }

    #[test]
    fn compose_over_custom_table() {
        let table = [
            NavigationEntry {
                path: "/a",
                label: "A",
                icon: NavIcon::Folder,
                group: NavGroup::Base,
                allowed_roles: &[Role::Admin],
            },
            NavigationEntry {
                path: "/b",
                label: "B",
                icon: NavIcon::Folder,
                group: NavGroup::Base,
                allowed_roles: &[],
            },
        ];
        let menu = compose_navigation(&table, Role::Admin, "/a");
        assert_eq!(menu.len(), 1);
        assert!(menu[0].is_active);
        assert!(compose_navigation(&table, Role::Writer, "/a").is_empty());
    }

    #[test]
    fn sidebar_mode_toggles() {
        let mode = SidebarMode::default();
        assert_eq!(mode, SidebarMode::Expanded);
        assert_eq!(mode.width_px(), 240);
        assert!(mode.shows_labels());

        let collapsed = mode.toggled();
        assert!(collapsed.is_collapsed());
        assert_eq!(collapsed.width_px(), 80);
        assert!(!collapsed.shows_labels());
        assert_eq!(collapsed.toggled(), SidebarMode::Expanded);
    }
}
