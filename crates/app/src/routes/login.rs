use dioxus::prelude::*;
use shared_types::{AppErrorKind, Role};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, ToastOptions,
};

use crate::routes::Route;
use crate::session::use_session;

const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Sign-in page: email/password form plus the demo role picker.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    if session.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            toast.error(
                "Please fill in all required fields".to_string(),
                ToastOptions::new(),
            );
            return;
        }

        loading.set(true);
        match session.login(email(), password()).await {
            Ok(_) => {
                toast.success("Login successful!".to_string(), ToastOptions::new());
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                let msg = match err.kind {
                    AppErrorKind::ValidationError => err.message,
                    _ => LOGIN_FAILED.to_string(),
                };
                toast.error(msg, ToastOptions::new());
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-brand",
                    h1 { "Script Master" }
                    p { "The complete platform for script editing and publishing" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Enter your credentials to access the dashboard" }
                    }

                    CardContent {
                        form { class: "auth-form", onsubmit: handle_login,
                            div { class: "auth-field",
                                Input {
                                    label: "Email",
                                    input_type: "email",
                                    id: "email",
                                    placeholder: "your@email.com",
                                    required: true,
                                    value: email(),
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                }
                            }
                            div { class: "auth-field",
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    id: "password",
                                    placeholder: "••••••••",
                                    required: true,
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                            }
                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }

                    CardFooter { class: "auth-demo",
                        p { class: "auth-demo-hint", "For demonstration purposes, choose a role:" }
                        div { class: "auth-demo-roles",
                            for role in Role::ALL {
                                Button {
                                    key: "{role}",
                                    variant: ButtonVariant::Outline,
                                    class: format!("auth-demo-role {}", role.color_class()),
                                    onclick: move |_| {
                                        session.select_role(role);
                                        toast.success(format!("Logged in as {role}"), ToastOptions::new());
                                        navigator().push(Route::Dashboard {});
                                    },
                                    {role.label()}
                                }
                            }
                        }
                        p { class: "auth-switch",
                            "No account yet? "
                            Link { to: Route::Signup {}, "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
