//! Portfolio content: profile, links, experience, projects, skills, education.
//!
//! The document ships inside the binary (and the WASM bundle) and is parsed
//! once on first access.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projects::Project;

/// Raw content document, compiled in.
pub const PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

static EMBEDDED: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::from_json(PORTFOLIO_JSON));

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("malformed portfolio document: {0}")]
    Malformed(String),
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
    #[error("{field} must not be empty")]
    Empty { field: String },
    #[error("proficiency '{name}' has level {level}, expected 0-100")]
    LevelOutOfRange { name: String, level: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub proficiencies: Vec<Proficiency>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub badge: Option<String>,
    pub tagline: String,
    pub intro: String,
    pub photo: String,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Gitlab,
    Linkedin,
    Mail,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Gitlab => "GitLab",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Mail => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Layout,
    Database,
    Server,
    Tool,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: SkillIcon,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proficiency {
    pub name: String,
    /// Percent, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: Option<String>,
}

impl Portfolio {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(json).map_err(|e| ContentError::Malformed(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require("profile.name", &self.profile.name)?;
        require("profile.tagline", &self.profile.tagline)?;

        for link in &self.socials {
            require("socials.url", &link.url)?;
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            require("projects.title", &project.title)?;
        }

        for category in &self.skills {
            require("skills.title", &category.title)?;
        }

        for p in &self.proficiencies {
            if p.level > 100 {
                return Err(ContentError::LevelOutOfRange {
                    name: p.name.clone(),
                    level: p.level,
                });
            }
        }

        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Empty {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// The compiled-in portfolio, parsed on first use.
pub fn embedded() -> Result<&'static Portfolio, ContentError> {
    EMBEDDED.as_ref().map_err(|e| e.clone())
}
