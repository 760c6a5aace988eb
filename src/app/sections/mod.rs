//! Page sections, in scroll order.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
