use dioxus::prelude::*;

/// Horizontal progress bar. `value` is a percentage and is clamped to 0..=100.
#[component]
pub fn Progress(
    value: u8,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let value = value.min(100);
    let base = vec![
        Attribute::new("class", "progress", None, false),
        Attribute::new("role", "progressbar", None, false),
        Attribute::new("aria-valuemin", "0", None, false),
        Attribute::new("aria-valuemax", "100", None, false),
        Attribute::new("aria-valuenow", value.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div {
                class: "progress-indicator",
                style: "width: {value}%",
            }
        }
    }
}
