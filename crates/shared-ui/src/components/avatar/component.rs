use dioxus::prelude::*;

/// Round user picture. Renders `fallback` (usually an initial) when `src`
/// is empty.
#[component]
pub fn Avatar(
    #[props(default)] src: String,
    #[props(default)] alt: String,
    fallback: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "avatar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if src.is_empty() {
                span { class: "avatar-fallback", "{fallback}" }
            } else {
                img { class: "avatar-image", src: "{src}", alt: "{alt}" }
            }
        }
    }
}
