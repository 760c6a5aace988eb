//! Page shell: head elements, background, nav bar and footer.

use dioxus::prelude::*;

use super::background::AnimatedBackground;
use super::navbar::Navbar;
use super::scroll_top::ScrollTopButton;
use crate::app::use_portfolio;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping the page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let portfolio = use_portfolio();
    let version = env!("PORTFOLIO_VERSION");
    let git_sha = env!("PORTFOLIO_GIT_SHA");
    let full_title = format!("{} - Portfolio", portfolio.profile.name);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Meta {
            name: "description",
            content: "{portfolio.profile.tagline}"
        }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/portfolio.css")
        }

        AnimatedBackground {}
        Navbar {}
        main { class: "page",
            {props.children}
        }
        footer { class: "footer",
            div { class: "container footer__row",
                small { "© {portfolio.profile.name}" }
                small { class: "text-muted", "Built with Rust and Dioxus · v{version} ({git_sha})" }
            }
        }
        ScrollTopButton {}
    }
}
