use dioxus::prelude::*;

/// Prepend a fixed class to caller attributes, merging `class` values.
fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered panel used across the dashboards and forms.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card", attributes);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-header", attributes);
    rsx! { div { ..merged, {children} } }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-title", attributes);
    rsx! { h3 { ..merged, {children} } }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-description", attributes);
    rsx! { p { ..merged, {children} } }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-content", attributes);
    rsx! { div { ..merged, {children} } }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-footer", attributes);
    rsx! { div { ..merged, {children} } }
}

/// One headline number for the dashboard overview rows.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader {
                CardDescription { "{label}" }
                CardTitle { class: "stat-card-value", "{value}" }
            }
            if !hint.is_empty() {
                CardContent {
                    p { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}
