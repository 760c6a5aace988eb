//! Project list and category filter.

use serde::{Deserialize, Serialize};

use crate::nav::section::capitalize;

/// Category a project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Ai,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Ai => "ai",
        }
    }
}

/// Filter tab above the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterTab {
    #[default]
    All,
    Web,
    Ai,
}

impl FilterTab {
    pub const ALL: [FilterTab; 3] = [FilterTab::All, FilterTab::Web, FilterTab::Ai];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTab::All => "all",
            FilterTab::Web => "web",
            FilterTab::Ai => "ai",
        }
    }

    /// Button label, e.g. "Web Projects".
    pub fn label(&self) -> String {
        format!("{} Projects", capitalize(self.as_str()))
    }

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            FilterTab::All => true,
            FilterTab::Web => category == ProjectCategory::Web,
            FilterTab::Ai => category == ProjectCategory::Ai,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub category: ProjectCategory,
}

impl Project {
    /// First `limit` technologies plus how many were left out.
    pub fn tech_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

/// Active tab of the project grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    active_tab: FilterTab,
}

impl ProjectFilter {
    pub fn new(tab: FilterTab) -> Self {
        Self { active_tab: tab }
    }

    pub fn active_tab(&self) -> FilterTab {
        self.active_tab
    }

    pub fn set_filter(&mut self, tab: FilterTab) {
        self.active_tab = tab;
    }

    /// Projects shown under the active tab, in input order.
    pub fn visible_projects<'a>(&self, all: &'a [Project]) -> Vec<&'a Project> {
        all.iter()
            .filter(|p| self.active_tab.matches(p.category))
            .collect()
    }
}
