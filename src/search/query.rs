//! Search query and mode flags.
//!
//! `SearchMode` keeps whole-word and regex mutually exclusive: its fields are
//! private and every setter clears the other flag.

use serde::Serialize;

// ===== SearchMode =====

/// Matching flags for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMode {
    case_sensitive: bool,
    whole_word: bool,
    regex: bool,
}

impl SearchMode {
    /// Build a mode from raw flags.
    ///
    /// If both `whole_word` and `regex` are requested, regex wins.
    pub fn new(case_sensitive: bool, whole_word: bool, regex: bool) -> Self {
        let mut mode = Self {
            case_sensitive,
            ..Self::default()
        };
        mode.set_whole_word(whole_word);
        mode.set_regex(regex);
        mode
    }

    /// Whether letter case must match.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether matches must be whole words.
    pub fn whole_word(&self) -> bool {
        self.whole_word
    }

    /// Whether the pattern is a regular expression.
    pub fn regex(&self) -> bool {
        self.regex
    }

    /// Toggle case sensitivity. Independent of the other flags.
    pub fn set_case_sensitive(&mut self, on: bool) {
        self.case_sensitive = on;
    }

    /// Enable or disable whole-word matching. Enabling clears regex.
    pub fn set_whole_word(&mut self, on: bool) {
        self.whole_word = on;
        if on {
            self.regex = false;
        }
    }

    /// Enable or disable regex matching. Enabling clears whole-word.
    pub fn set_regex(&mut self, on: bool) {
        self.regex = on;
        if on {
            self.whole_word = false;
        }
    }

    /// Apply a partial update. Regex is applied last, so it wins a tie.
    pub fn apply(&mut self, change: ModeChange) {
        if let Some(on) = change.case_sensitive {
            self.set_case_sensitive(on);
        }
        if let Some(on) = change.whole_word {
            self.set_whole_word(on);
        }
        if let Some(on) = change.regex {
            self.set_regex(on);
        }
    }

    /// True when whole-word and regex are not both on.
    pub fn is_consistent(&self) -> bool {
        !(self.whole_word && self.regex)
    }
}

// ===== ModeChange =====

/// Partial update to a [`SearchMode`]. `None` leaves a flag untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeChange {
    /// New case-sensitivity flag.
    pub case_sensitive: Option<bool>,
    /// New whole-word flag.
    pub whole_word: Option<bool>,
    /// New regex flag.
    pub regex: Option<bool>,
}

impl ModeChange {
    /// Change only case sensitivity.
    pub fn case_sensitive(on: bool) -> Self {
        Self {
            case_sensitive: Some(on),
            ..Self::default()
        }
    }

    /// Change only whole-word matching.
    pub fn whole_word(on: bool) -> Self {
        Self {
            whole_word: Some(on),
            ..Self::default()
        }
    }

    /// Change only regex matching.
    pub fn regex(on: bool) -> Self {
        Self {
            regex: Some(on),
            ..Self::default()
        }
    }

    /// True if no flag would change.
    pub fn is_empty(&self) -> bool {
        self.case_sensitive.is_none() && self.whole_word.is_none() && self.regex.is_none()
    }
}

// ===== SearchQuery =====

/// Pattern plus matching flags.
///
/// The pattern is kept exactly as typed; only blankness is judged on the
/// trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pattern: String,
    mode: SearchMode,
}

impl SearchQuery {
    /// Create a query.
    pub fn new(pattern: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
        }
    }

    /// Get the raw pattern text, untrimmed.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the mode flags.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// True when the pattern is empty or whitespace-only. No search runs.
    pub fn is_blank(&self) -> bool {
        self.pattern.trim().is_empty()
    }

    pub(crate) fn set_pattern(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    pub(crate) fn mode_mut(&mut self) -> &mut SearchMode {
        &mut self.mode
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
