//! Skill categories and proficiency bars.

use dioxus::prelude::*;

use crate::app::components::{Icon, IconKind, SectionHeading};
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::nav::SectionId;

#[component]
pub fn Skills() -> Element {
    let portfolio = use_portfolio();

    rsx! {
        section { id: SectionId::Skills.as_str(), class: "section",
            div { class: "container",
                SectionHeading { title: "My Skills".to_string() }
                div { class: "skills",
                    for (i, category) in portfolio.skills.iter().enumerate() {
                        div { key: "{category.title}", class: "card skills__category rise-in", style: stagger_delay(i, 100, 0),
                            div { class: "skills__header",
                                span { class: "skills__icon", Icon { icon: IconKind::from(category.icon), size: 24 } }
                                h3 { "{category.title}" }
                            }
                            div { class: "chips",
                                for (j, skill) in category.skills.iter().enumerate() {
                                    span { key: "{j}", class: "chip", "{skill}" }
                                }
                            }
                        }
                    }
                }

                div { class: "proficiency rise-in",
                    h3 { class: "proficiency__title", "Technical Proficiency" }
                    for (i, skill) in portfolio.proficiencies.iter().enumerate() {
                        div { key: "{skill.name}", class: "proficiency__row",
                            div { class: "proficiency__labels",
                                span { "{skill.name}" }
                                span { class: "proficiency__level", "{skill.level}%" }
                            }
                            div { class: "proficiency__track",
                                div {
                                    class: "proficiency__fill grow-x",
                                    style: format!("width: {}%; {}", skill.level, stagger_delay(i, 100, 0)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
