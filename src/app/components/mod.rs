//! Shared UI components for the portfolio page.

pub mod background;
pub mod heading;
pub mod icon;
pub mod layout;
pub mod navbar;
pub mod scroll_top;
pub mod social;

pub use background::AnimatedBackground;
pub use heading::SectionHeading;
pub use icon::{Icon, IconKind};
pub use layout::Layout;
pub use navbar::Navbar;
pub use scroll_top::ScrollTopButton;
pub use social::SocialLinks;
