//! Social profile links, shared by the nav bar, hero and contact section.

use dioxus::prelude::*;

use crate::app::components::icon::{Icon, IconKind};
use crate::app::motion::stagger_delay;
use crate::app::use_portfolio;

#[component]
pub fn SocialLinks(
    /// Extra class for the wrapping element
    #[props(default)]
    class: String,
    #[props(default = 20)]
    size: u32,
    /// Delay before the first icon fades in
    #[props(default = 0)]
    base_delay_ms: u32,
) -> Element {
    let portfolio = use_portfolio();

    rsx! {
        div { class: "socials {class}",
            for (i, link) in portfolio.socials.iter().enumerate() {
                a {
                    key: "{link.url}",
                    class: "socials__link fade-in",
                    style: stagger_delay(i, 100, base_delay_ms),
                    href: "{link.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: link.kind.label(),
                    Icon { icon: IconKind::from(link.kind), size }
                }
            }
        }
    }
}
