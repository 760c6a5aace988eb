//! Inline stroke icons (24x24 grid, outline style).

use dioxus::prelude::*;

use crate::content::{SkillIcon, SocialKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    ArrowUp,
    Mail,
    Github,
    Gitlab,
    Linkedin,
    ExternalLink,
    Download,
    Code,
    Layout,
    Database,
    Server,
    Tool,
    Globe,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
            IconKind::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconKind::Gitlab => &[
                "m22 13.29-3.33-10a.42.42 0 0 0-.14-.18.38.38 0 0 0-.22-.11.39.39 0 0 0-.23.07.42.42 0 0 0-.14.18l-2.26 6.67H8.32L6.1 3.26a.42.42 0 0 0-.1-.18.38.38 0 0 0-.26-.08.39.39 0 0 0-.23.07.42.42 0 0 0-.14.18L2 13.29a.74.74 0 0 0 .27.83L12 21l9.69-6.88a.71.71 0 0 0 .31-.83Z",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            IconKind::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconKind::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            IconKind::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            IconKind::Layout => &["M3 3h18v18H3z", "M3 9h18", "M9 21V9"],
            IconKind::Database => &[
                "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
                "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
            ],
            IconKind::Server => &["M2 2h20v8H2z", "M2 14h20v8H2z", "M6 6h.01", "M6 18h.01"],
            IconKind::Tool => &[
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            ],
            IconKind::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
        }
    }
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Github => IconKind::Github,
            SocialKind::Gitlab => IconKind::Gitlab,
            SocialKind::Linkedin => IconKind::Linkedin,
            SocialKind::Mail => IconKind::Mail,
        }
    }
}

impl From<SkillIcon> for IconKind {
    fn from(icon: SkillIcon) -> Self {
        match icon {
            SkillIcon::Code => IconKind::Code,
            SkillIcon::Layout => IconKind::Layout,
            SkillIcon::Database => IconKind::Database,
            SkillIcon::Server => IconKind::Server,
            SkillIcon::Tool => IconKind::Tool,
            SkillIcon::Globe => IconKind::Globe,
        }
    }
}

#[component]
pub fn Icon(
    icon: IconKind,
    /// Edge length in pixels
    #[props(default = 20)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths() {
                path { d: *d }
            }
        }
    }
}
