//! Contact section: mail button and the same profile links as the hero.

use dioxus::prelude::*;

use crate::app::components::{Icon, IconKind, SectionHeading};
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;
use crate::content::SocialKind;
use crate::nav::SectionId;

#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let mail = portfolio
        .socials
        .iter()
        .find(|link| link.kind == SocialKind::Mail);

    rsx! {
        section { id: SectionId::Contact.as_str(), class: "section section--tinted",
            div { class: "container contact",
                SectionHeading {
                    title: "Get In Touch".to_string(),
                    subtitle: "Open to internships, freelance work and collaborations.".to_string(),
                }
                div { class: "contact__cards",
                    for (i, link) in portfolio.socials.iter().enumerate() {
                        a {
                            key: "{link.url}",
                            class: "card contact__card zoom-in",
                            style: stagger_delay(i, 100, 0),
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: IconKind::from(link.kind), size: 28 }
                            span { {link.kind.label()} }
                        }
                    }
                }
                if let Some(mail) = mail {
                    a { class: "btn btn--primary contact__cta", href: "{mail.url}",
                        Icon { icon: IconKind::Mail, size: 18 }
                        "Say Hello"
                    }
                }
            }
        }
    }
}
