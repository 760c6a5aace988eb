//! Fixed navigation bar with desktop links and a mobile overlay menu.

use dioxus::prelude::*;

use crate::app::components::icon::{Icon, IconKind};
use crate::app::components::social::SocialLinks;
use crate::app::motion::stagger_delay;
use crate::app::nav_context::use_nav;
use crate::app::use_portfolio;
use crate::nav::SectionId;

/// Navigation bar. Turns opaque and compact once the page is scrolled.
#[component]
pub fn Navbar() -> Element {
    let navigation = use_nav();
    let portfolio = use_portfolio();
    let state = navigation.state();

    rsx! {
        nav { class: if state.scrolled { "navbar navbar--scrolled slide-down" } else { "navbar slide-down" },
            div { class: "container navbar__row",
                button {
                    class: "navbar__brand",
                    onclick: move |_| navigation.scroll_to_top(),
                    "{portfolio.profile.name}"
                }

                // Desktop navigation
                div { class: "navbar__links",
                    for (i, section) in SectionId::ALL.into_iter().enumerate() {
                        button {
                            key: "{section}",
                            class: "navbar__link fade-down",
                            style: stagger_delay(i, 100, 0),
                            onclick: move |_| navigation.navigate(section),
                            {section.label()}
                        }
                    }
                }

                SocialLinks { class: "navbar__socials".to_string(), size: 20, base_delay_ms: 500 }

                // Mobile navigation toggle
                button {
                    class: "navbar__toggle",
                    "aria-label": if state.menu_open { "Close menu" } else { "Open menu" },
                    "aria-expanded": if state.menu_open { "true" } else { "false" },
                    onclick: move |_| navigation.toggle_menu(),
                    if state.menu_open {
                        Icon { icon: IconKind::Close, size: 24 }
                    } else {
                        Icon { icon: IconKind::Menu, size: 24 }
                    }
                }
            }

            if state.menu_open {
                MobileMenu {}
            }
        }
    }
}

/// Overlay listing every section plus the social links.
#[component]
fn MobileMenu() -> Element {
    let navigation = use_nav();

    rsx! {
        div { class: "mobile-menu expand-in",
            for (i, section) in SectionId::ALL.into_iter().enumerate() {
                button {
                    key: "{section}",
                    class: "mobile-menu__link slide-right",
                    style: stagger_delay(i, 100, 0),
                    onclick: move |_| navigation.navigate(section),
                    {section.label()}
                }
            }
            SocialLinks { class: "mobile-menu__socials".to_string(), size: 24 }
        }
    }
}
