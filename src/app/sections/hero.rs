//! Landing section: name, tagline, calls to action and profile photo.

use dioxus::prelude::*;

use crate::app::components::{Icon, IconKind, SocialLinks};
use crate::app::motion::{name_letters, stagger_delay};
use crate::app::nav_context::use_nav;
use crate::app::use_portfolio;
use crate::nav::SectionId;

#[component]
pub fn Hero() -> Element {
    let nav = use_nav();
    let portfolio = use_portfolio();
    let profile = &portfolio.profile;
    let letters = name_letters(&profile.name);

    rsx! {
        section { class: "hero",
            div { class: "container hero__row",
                div { class: "hero__text",
                    if let Some(badge) = &profile.badge {
                        div { class: "hero__badge pop-in", style: stagger_delay(0, 0, 200), "{badge}" }
                    }
                    h1 { class: "hero__title rise-in",
                        "Hi, I'm "
                        span { class: "hero__name",
                            for (i, letter) in letters.into_iter().enumerate() {
                                span {
                                    key: "{i}",
                                    class: "hero__letter letter-rise",
                                    style: stagger_delay(i, 50, 300),
                                    "{letter}"
                                }
                            }
                        }
                    }
                    h2 { class: "hero__tagline rise-in", style: stagger_delay(1, 100, 300), "{profile.tagline}" }
                    p { class: "hero__intro rise-in", style: stagger_delay(2, 100, 300), "{profile.intro}" }

                    div { class: "hero__actions rise-in", style: stagger_delay(3, 100, 300),
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| nav.navigate(SectionId::Contact),
                            Icon { icon: IconKind::Mail, size: 18 }
                            "Contact Me"
                        }
                        if let Some(resume) = &profile.resume {
                            a {
                                class: "btn btn--outline",
                                href: "{resume}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { icon: IconKind::Download, size: 18 }
                                "View Resume"
                            }
                        }
                    }

                    SocialLinks { class: "hero__socials".to_string(), size: 24, base_delay_ms: 700 }
                }

                div { class: "hero__portrait slide-left",
                    div { class: "hero__float hero__float--yellow", "aria-hidden": "true" }
                    div { class: "hero__float hero__float--pink", "aria-hidden": "true" }
                    div { class: "hero__photo",
                        img { src: "{profile.photo}", alt: "{profile.name}" }
                    }
                }
            }
        }
    }
}
