use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBookOpen, LdChevronLeft, LdChevronRight, LdFileText, LdFolder,
    LdLayoutDashboard, LdLogOut, LdMessageSquare, LdSettings, LdUpload, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{navigation_for, NavIcon, SidebarMode};
use shared_ui::{
    Avatar, Button, ButtonVariant, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarTrigger,
};

use crate::routes::Route;
use crate::session::SessionStore;

const ICON_SIZE: u32 = 20;

/// Glyph for a navigation entry.
fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::LayoutDashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Upload => rsx! {
            Icon::<LdUpload> { icon: LdUpload, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::BookOpen => rsx! {
            Icon::<LdBookOpen> { icon: LdBookOpen, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::MessageSquare => rsx! {
            Icon::<LdMessageSquare> { icon: LdMessageSquare, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::FileText => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Folder => rsx! {
            Icon::<LdFolder> { icon: LdFolder, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Activity => rsx! {
            Icon::<LdActivity> { icon: LdActivity, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Settings => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: ICON_SIZE, height: ICON_SIZE }
        },
    }
}

/// Role-scoped sidebar. Renders nothing without a session.
///
/// The collapse toggle is local to this component and resets when it
/// remounts.
#[component]
pub fn NavMenu(session: SessionStore) -> Element {
    let route: Route = use_route();
    let mut mode = use_signal(SidebarMode::default);

    let Some(identity) = session.identity() else {
        return rsx! {};
    };

    let location = route.to_string();
    let entries = navigation_for(identity.role, &location);
    let current = mode();
    let collapsed = current.is_collapsed();
    let show_labels = current.shows_labels();
    let role = identity.role;
    let badge_class = format!("role-badge {}", role.color_class());
    let initial = role.initial();
    let role_label = role.label();
    let avatar_src = identity.avatar.clone().unwrap_or_default();

    let mut session = session;
    let handle_logout = move |_: MouseEvent| {
        session.logout();
        navigator().push(Route::Login {});
    };

    rsx! {
        Sidebar { collapsed, width_px: current.width_px(),
            SidebarHeader {
                div { class: "sidebar-brand",
                    span { class: "{badge_class}", "{initial}" }
                    if show_labels {
                        span { class: "sidebar-brand-name", "Script Master" }
                    }
                }
                SidebarTrigger { onclick: move |_| mode.set(current.toggled()),
                    if collapsed {
                        Icon::<LdChevronRight> { icon: LdChevronRight, width: 18, height: 18 }
                    } else {
                        Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 18, height: 18 }
                    }
                }
            }

            SidebarContent {
                SidebarMenu {
                    for item in entries {
                        SidebarMenuItem { key: "{item.entry.path}",
                            Link { to: item.entry.path,
                                SidebarMenuButton {
                                    active: item.is_active,
                                    title: item.entry.label,
                                    {nav_icon(item.entry.icon)}
                                    if show_labels {
                                        span { "{item.entry.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            SidebarFooter {
                div { class: "sidebar-user",
                    Avatar {
                        src: avatar_src,
                        alt: identity.name.clone(),
                        fallback: identity.fallback_initial(),
                    }
                    if show_labels {
                        div { class: "sidebar-user-info",
                            span { class: "sidebar-user-name", "{identity.name}" }
                            span { class: "sidebar-user-role", "{role_label}" }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "sidebar-logout",
                    onclick: handle_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    if show_labels {
                        span { "Logout" }
                    }
                }
            }
        }
    }
}
