use pretty_assertions::assert_eq;
use shared_types::{navigation_for, ActiveNavigationEntry, Role, NAVIGATION_ENTRIES};

fn labels(items: &[ActiveNavigationEntry]) -> Vec<&'static str> {
    items.iter().map(|i| i.entry.label).collect()
}

fn active_paths(items: &[ActiveNavigationEntry]) -> Vec<&'static str> {
    items
        .iter()
        .filter(|i| i.is_active)
        .map(|i| i.entry.path)
        .collect()
}

#[test]
fn each_role_sees_exactly_its_allowed_entries_in_order() {
    for role in Role::ALL {
        let menu = navigation_for(role, "/");
        let expected: Vec<&str> = NAVIGATION_ENTRIES
            .iter()
            .filter(|e| e.allowed_roles.contains(&role))
            .map(|e| e.label)
            .collect();
        assert_eq!(labels(&menu), expected, "{role}");
    }
}

#[test]
fn writer_menu_labels() {
    assert_eq!(
        labels(&navigation_for(Role::Writer, "/")),
        vec!["Dashboard", "Upload Script", "My Scripts", "Messages", "Settings"]
    );
}

#[test]
fn editor_menu_labels() {
    assert_eq!(
        labels(&navigation_for(Role::Editor, "/")),
        vec!["Dashboard", "Messages", "Assignments", "Settings"]
    );
}

#[test]
fn admin_menu_labels() {
    assert_eq!(
        labels(&navigation_for(Role::Admin, "/")),
        vec!["Dashboard", "Manuscripts", "Editors", "Reports", "Settings"]
    );
}

#[test]
fn editor_on_assignments_marks_only_assignments_active() {
    let menu = navigation_for(Role::Editor, "/assignments");
    assert_eq!(active_paths(&menu), vec!["/assignments"]);
}

#[test]
fn at_most_one_entry_is_active_for_any_location() {
    let locations = ["/", "/upload", "/messages", "/settings", "/login", "/nowhere"];
    for role in Role::ALL {
        for location in locations {
            let menu = navigation_for(role, location);
            assert!(active_paths(&menu).len() <= 1, "{role} at {location}");
        }
    }
}

#[test]
fn nested_location_does_not_activate_parent() {
    let menu = navigation_for(Role::Editor, "/assignments/3");
    assert!(active_paths(&menu).is_empty());
}

#[test]
fn location_outside_the_menu_marks_nothing() {
    let menu = navigation_for(Role::Writer, "/assignments");
    assert!(active_paths(&menu).is_empty());
    assert_eq!(menu.len(), 5);
}
