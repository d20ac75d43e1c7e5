//! Style guard applied to every emitted phrase.

use serde::{Deserialize, Serialize};

/// Default maximum display length, in characters
pub const DEFAULT_MAX_CHARS: usize = 140;

/// Accepted display lengths; configured values are clamped into it
pub const MAX_CHARS_RANGE: std::ops::RangeInclusive<usize> = 120..=140;

const ELLIPSIS: char = '…';

/// Jargon rejected unless configuration says otherwise
pub fn default_denylist() -> Vec<String> {
    [
        "synergy",
        "synergize",
        "leverage",
        "paradigm",
        "bandwidth",
        "circle back",
        "low-hanging fruit",
        "move the needle",
        "psychometric",
        "neurotic",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Guard settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub max_chars: usize,
    pub jargon_denylist: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            jargon_denylist: default_denylist(),
        }
    }
}

/// Normalizes, filters and truncates display text
#[derive(Debug, Clone)]
pub struct StyleGuard {
    max_chars: usize,
    // Each entry pre-split into lowercase word tokens
    denylist: Vec<Vec<String>>,
}

impl StyleGuard {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            max_chars: config
                .max_chars
                .clamp(*MAX_CHARS_RANGE.start(), *MAX_CHARS_RANGE.end()),
            denylist: config
                .jargon_denylist
                .iter()
                .map(|term| words(term))
                .filter(|tokens| !tokens.is_empty())
                .collect(),
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Apply the guard. `None` means the phrase must not be shown.
    pub fn apply(&self, text: &str) -> Option<String> {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return None;
        }
        if let Some(term) = self.jargon_in(&collapsed) {
            tracing::debug!(term = %term, "phrase rejected by jargon denylist");
            return None;
        }
        Some(truncate(&collapsed, self.max_chars))
    }

    /// First denylisted term found in `text`, matched on whole words
    pub fn jargon_in(&self, text: &str) -> Option<String> {
        let tokens = words(text);
        self.denylist
            .iter()
            .find(|term| tokens.windows(term.len()).any(|w| w == term.as_slice()))
            .map(|term| term.join(" "))
    }
}

impl Default for StyleGuard {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars - 1).collect();
    let trimmed_len = cut.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == ';').len();
    cut.truncate(trimmed_len);
    cut.push(ELLIPSIS);
    cut
}
