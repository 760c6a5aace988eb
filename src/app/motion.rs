//! Animation descriptors.
//!
//! Motion is pure CSS (keyframes in `public/portfolio.css`); these helpers
//! only compute per-element delays and blob parameters.

/// Inline style delaying an entrance animation for the `index`-th sibling.
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> String {
    let delay = u64::from(base_ms) + index as u64 * u64::from(step_ms);
    format!("animation-delay: {delay}ms;")
}

/// Characters of `name` with spaces made non-breaking, so each letter can be
/// animated as its own inline block without collapsing the gap.
pub fn name_letters(name: &str) -> Vec<char> {
    name.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .collect()
}

/// Blurred background blob drifting on a loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub class: &'static str,
    pub duration_s: u32,
    pub delay_s: u32,
}

impl Blob {
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}s; animation-delay: {}s;",
            self.duration_s, self.delay_s
        )
    }
}

pub const BACKGROUND_BLOBS: [Blob; 3] = [
    Blob {
        class: "blob blob--purple",
        duration_s: 20,
        delay_s: 0,
    },
    Blob {
        class: "blob blob--indigo",
        duration_s: 15,
        delay_s: 2,
    },
    Blob {
        class: "blob blob--blue",
        duration_s: 25,
        delay_s: 5,
    },
];
