//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod motion;
pub mod nav_context;
pub mod pages;
pub mod sections;

use crate::content::{self, Portfolio};
use nav_context::use_nav_provider;
use pages::Home;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize navigation context at app root (single scroll listener for the page)
    use_nav_provider();

    let loaded = use_hook(|| {
        let loaded = content::embedded();
        if let Err(e) = &loaded {
            tracing::error!("Failed to load portfolio content: {}", e);
        }
        loaded
    });

    match loaded {
        Ok(portfolio) => rsx! {
            PortfolioRoot { portfolio }
        },
        Err(e) => rsx! {
            div { class: "load-error",
                h1 { "This page could not be rendered" }
                p { "{e}" }
            }
        },
    }
}

/// Provides the content to every section, then hands over to the router.
#[component]
fn PortfolioRoot(portfolio: &'static Portfolio) -> Element {
    use_context_provider(|| portfolio);

    rsx! {
        Router::<Route> {}
    }
}

/// Get the portfolio content - use in any component below the root
pub fn use_portfolio() -> &'static Portfolio {
    use_context::<&'static Portfolio>()
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}
