//! Page components for the Dioxus fullstack web UI.

mod home;

pub use home::Home;
