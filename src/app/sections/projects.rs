//! Project grid with category filter tabs.

use dioxus::prelude::*;

use crate::app::components::{Icon, IconKind, SectionHeading};
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::nav::SectionId;
use crate::projects::{FilterTab, Project, ProjectFilter};

/// Technologies listed on a card before collapsing into a "+N" chip.
const TECH_PREVIEW_LIMIT: usize = 5;

#[component]
pub fn Projects() -> Element {
    let portfolio = use_portfolio();
    let mut filter = use_signal(ProjectFilter::default);

    let active = filter.read().active_tab();
    let visible = filter.read().visible_projects(&portfolio.projects);

    rsx! {
        section { id: SectionId::Projects.as_str(), class: "section section--light",
            div { class: "container",
                SectionHeading { title: "My Projects".to_string() }

                div { class: "filter-tabs", role: "tablist",
                    for (i, tab) in FilterTab::ALL.into_iter().enumerate() {
                        button {
                            key: "{tab:?}",
                            role: "tab",
                            "aria-selected": if tab == active { "true" } else { "false" },
                            class: if tab == active { "filter-tab filter-tab--active zoom-in" } else { "filter-tab zoom-in" },
                            style: stagger_delay(i, 100, 0),
                            onclick: move |_| filter.write().set_filter(tab),
                            {tab.label()}
                        }
                    }
                }

                div { class: "project-grid",
                    if visible.is_empty() {
                        p { class: "text-muted", "Nothing here yet." }
                    }
                    for (i, project) in visible.into_iter().enumerate() {
                        ProjectCard { key: "{active:?}-{project.id}", project: project.clone(), index: i }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> Element {
    let (technologies, hidden) = project.tech_preview(TECH_PREVIEW_LIMIT);
    let category = project.category.as_str();

    rsx! {
        article { class: "card project-card rise-in", style: stagger_delay(index, 200, 0),
            div { class: "project-card__media",
                img { class: "project-card__image", src: "{project.image}", alt: "{project.title}" }
                div { class: "project-card__overlay",
                    if let Some(link) = &project.live_link {
                        a {
                            class: "project-card__action",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "Live Demo",
                            Icon { icon: IconKind::ExternalLink }
                        }
                    }
                    if let Some(link) = &project.github_link {
                        a {
                            class: "project-card__action project-card__action--dark",
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "View Code",
                            Icon { icon: IconKind::Github }
                        }
                    }
                }
            }
            div { class: "project-card__body",
                div { class: "project-card__header",
                    h3 { "{project.title}" }
                    span { class: "badge badge--{category}", "{category}" }
                }
                p { class: "project-card__description", "{project.description}" }
                h4 { class: "project-card__label", "Technologies:" }
                div { class: "chips",
                    for (i, tech) in technologies.iter().enumerate() {
                        span { key: "{i}", class: "chip", "{tech}" }
                    }
                    if hidden > 0 {
                        span { class: "chip chip--more", "+{hidden}" }
                    }
                }
            }
        }
    }
}
