use dioxus::prelude::*;

use crate::app::components::SectionHeading;
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::nav::SectionId;

/// Vertical timeline of roles, newest first as listed in the content file.
#[component]
pub fn Experience() -> Element {
    let portfolio = use_portfolio();

    rsx! {
        section { id: SectionId::Experience.as_str(), class: "section section--tinted",
            div { class: "container",
                SectionHeading { title: "Experience".to_string() }
                ol { class: "timeline",
                    for (i, item) in portfolio.experience.iter().enumerate() {
                        li { key: "{i}", class: "timeline__item card rise-in", style: stagger_delay(i, 200, 0),
                            div { class: "timeline__header",
                                h3 { "{item.role}" }
                                span { class: "timeline__period", "{item.period}" }
                            }
                            p { class: "timeline__company", "{item.company}" }
                            ul {
                                for (j, point) in item.points.iter().enumerate() {
                                    li { key: "{j}", "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
