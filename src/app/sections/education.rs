use dioxus::prelude::*;

use crate::app::components::SectionHeading;
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::nav::SectionId;

#[component]
pub fn Education() -> Element {
    let portfolio = use_portfolio();

    rsx! {
        section { id: SectionId::Education.as_str(), class: "section",
            div { class: "container",
                SectionHeading { title: "Education".to_string() }
                div { class: "education",
                    for (i, entry) in portfolio.education.iter().enumerate() {
                        article { key: "{i}", class: "card education__entry rise-in", style: stagger_delay(i, 200, 0),
                            h3 { "{entry.degree}" }
                            p { class: "education__institution", "{entry.institution}" }
                            span { class: "education__period", "{entry.period}" }
                            if let Some(details) = &entry.details {
                                p { class: "education__details", "{details}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
