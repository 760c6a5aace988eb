//! Portfolio Site - Rust Implementation
//!
//! A single-page personal portfolio rendered with Dioxus (SSR + hydration).
//!
//! This library provides:
//! - Section navigation and scroll tracking (framework-agnostic controller)
//! - Project filtering by category
//! - Embedded, validated portfolio content
//! - The Dioxus UI and, with the `server` feature, the HTTP server

pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod content;
pub mod nav;
pub mod projects;
#[cfg(feature = "server")]
pub mod server;
