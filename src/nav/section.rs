//! Navigable page sections.

use serde::{Deserialize, Serialize};

/// One of the page sections reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in nav bar display order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// DOM anchor id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Nav bar label: the anchor id with its first letter upper-cased.
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
