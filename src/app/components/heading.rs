use dioxus::prelude::*;

/// Centered section title with the accent bar underneath.
#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-heading rise-in",
            h2 { class: "section-heading__title", "{title}" }
            div { class: "section-heading__bar" }
            if let Some(subtitle) = subtitle {
                p { class: "section-heading__subtitle", "{subtitle}" }
            }
        }
    }
}
