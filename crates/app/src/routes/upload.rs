use dioxus::prelude::*;
use shared_types::manuscript::{ScriptSubmission, GENRES};
use shared_types::AppError;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormSelect, Input, PageHeader, Textarea, ToastOptions,
};
use validator::Validate;

/// Check a submission before it is sent. Field errors collapse into the
/// single form-level message shown in the toast.
pub fn check_submission(submission: &ScriptSubmission) -> Result<(), AppError> {
    submission.validate().map_err(AppError::from)
}

/// Script details form for writers. The manuscript file itself is not handled.
#[component]
pub fn UploadScript() -> Element {
    let toast = use_toast();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut genre = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = ScriptSubmission {
            title: title().trim().to_string(),
            description: description(),
            genre: genre(),
        };

        match check_submission(&submission) {
            Ok(()) => {
                tracing::info!(
                    title = %submission.title,
                    genre = submission.genre_label().unwrap_or("Other"),
                    "Script submitted"
                );
                toast.success("Script uploaded successfully!".to_string(), ToastOptions::new());
                title.set(String::new());
                description.set(String::new());
                genre.set(String::new());
            }
            Err(err) => {
                let fields: Vec<_> = err.field_errors.keys().collect();
                tracing::debug!(?fields, "Submission rejected");
                toast.error(err.message, ToastOptions::new());
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./upload.css") }

        div { class: "upload-page",
            PageHeader {
                title: "Upload New Script",
                subtitle: "Submit your manuscript for editing and publication",
            }

            form { class: "upload-form", onsubmit: handle_submit,
                Card {
                    CardHeader {
                        CardTitle { "Script Details" }
                        CardDescription { "Provide information about your manuscript" }
                    }
                    CardContent {
                        div { class: "upload-fields",
                            Input {
                                label: "Title",
                                id: "title",
                                required: true,
                                placeholder: "Enter the title of your script",
                                value: title(),
                                on_input: move |e: FormEvent| title.set(e.value()),
                            }
                            Textarea {
                                label: "Description",
                                id: "description",
                                placeholder: "Provide a brief description or synopsis",
                                value: description(),
                                on_input: move |e: FormEvent| description.set(e.value()),
                            }
                            FormSelect {
                                id: "genre",
                                label: "Genre",
                                required: true,
                                value: genre(),
                                onchange: move |e: Event<FormData>| genre.set(e.value()),
                                option { value: "", disabled: true, "Select a genre" }
                                for (value, label) in GENRES.iter() {
                                    option { key: "{value}", value: *value, "{label}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Submission" }
                        CardDescription { "Submit your manuscript for review and editing" }
                    }
                    CardContent {
                        p { class: "upload-terms-intro", "By submitting this manuscript, you confirm that:" }
                        ul { class: "upload-terms",
                            li { "You hold the necessary rights to this content" }
                            li { "The manuscript does not contain plagiarized material" }
                            li { "You agree to the platform's terms and conditions" }
                        }
                    }
                    CardFooter {
                        Button { button_type: "submit", class: "upload-submit", "Submit Script" }
                    }
                }
            }
        }
    }
}
