use dioxus::prelude::*;

/// Native `<select>` bound to its label by `id`. Children are `option`s.
#[component]
pub fn FormSelect(
    id: String,
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "form-select-required", aria_hidden: "true", " *" }
                    }
                }
            }
            select {
                id: "{id}",
                name: "{id}",
                class: "form-select",
                value: value,
                required: required,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
