use dioxus::prelude::*;
use shared_types::{AppError, SignupRequest};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
    ToastOptions,
};
use validator::Validate;

use crate::routes::Route;

/// First field error of an invalid signup, or `None` when the form is complete.
pub fn signup_problem(request: &SignupRequest) -> Option<String> {
    let err = AppError::from(request.validate().err()?);
    let mut fields: Vec<_> = err.field_errors.into_iter().collect();
    fields.sort();
    fields.into_iter().next().map(|(_, msg)| msg)
}

/// Public signup placeholder. Accounts are not created in demo mode; the
/// form points visitors back to the role picker on the login page.
#[component]
pub fn Signup() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let request = SignupRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if let Some(problem) = signup_problem(&request) {
            toast.error(problem, ToastOptions::new());
            return;
        }
        tracing::info!(email = %request.email, "Signup attempted in demo mode");
        toast.info(
            "Sign up is not available in the demo. Pick a role on the login page.".to_string(),
            ToastOptions::new(),
        );
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-brand",
                    h1 { "Script Master" }
                    p { "Create an account to start submitting scripts" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign Up" }
                        CardDescription { "Tell us a little about yourself" }
                    }

                    CardContent {
                        form { class: "auth-form", onsubmit: handle_signup,
                            Input {
                                label: "Name",
                                id: "name",
                                placeholder: "Jane Writer",
                                required: true,
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                placeholder: "your@email.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                placeholder: "At least 8 characters",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                "Create Account"
                            }
                        }
                    }

                    CardFooter {
                        p { class: "auth-switch",
                            "Already have an account? "
                            Link { to: Route::Login {}, "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
