use dioxus::prelude::*;

use crate::app::components::SectionHeading;
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::nav::SectionId;

#[component]
pub fn About() -> Element {
    let about = &use_portfolio().about;

    rsx! {
        section { id: SectionId::About.as_str(), class: "section",
            div { class: "container",
                SectionHeading { title: "About Me".to_string() }
                div { class: "about",
                    div { class: "about__text",
                        for (i, paragraph) in about.paragraphs.iter().enumerate() {
                            p { key: "{i}", class: "rise-in", style: stagger_delay(i, 150, 0), "{paragraph}" }
                        }
                    }
                    div { class: "about__highlights",
                        for (i, highlight) in about.highlights.iter().enumerate() {
                            div {
                                key: "{highlight.label}",
                                class: "card highlight zoom-in",
                                style: stagger_delay(i, 100, 200),
                                span { class: "highlight__value", "{highlight.value}" }
                                span { class: "highlight__label", "{highlight.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
