//! Find-bar navigation controller.
//!
//! Owns the [`SearchState`]. The host calls in directly from its input
//! handlers; the controller reads the corpus and issues scroll, warning and
//! hide requests back through [`SearchHost`].

use crate::model::{ScrollPosition, SearchError};
use crate::search::{find_matches, ModeChange, SearchMode, SearchQuery, TextBlock};
use crate::state::SearchState;
use tracing::{debug, trace, warn};

// ===== SearchHost =====

/// The message-display surface the find bar is attached to.
pub trait SearchHost {
    /// Snapshot of every displayed block, in display order. Must not mutate.
    fn corpus(&self) -> Vec<TextBlock<'_>>;

    /// Bring `position` into view.
    fn scroll_to(&mut self, position: ScrollPosition);

    /// Show a user-visible warning (bad pattern).
    fn warn(&mut self, error: &SearchError);

    /// Hide the find bar.
    fn hide_find_bar(&mut self);
}

// ===== SearchOutcome =====

/// Result of a recompute, for callers that want to react beyond the host calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank pattern: matches cleared.
    Cleared,
    /// Valid pattern, nothing found.
    NoMatches,
    /// Found this many matches; the first is current.
    Found(usize),
    /// Pattern failed to compile; previous matches kept, current reset to the first.
    Rejected,
}

// ===== FindController =====

/// Navigation controller for one find bar.
#[derive(Debug, Clone, Default)]
pub struct FindController {
    state: SearchState,
}

impl FindController {
    /// Create a controller with an empty pattern and the given default flags.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            state: SearchState::new(SearchQuery::new(String::new(), mode)),
        }
    }

    /// Read access for status display.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The pattern text changed.
    ///
    /// Stores the pattern, recomputes and scrolls to the first match if any.
    /// The pattern is stored even if it fails to compile.
    pub fn on_query_changed<H: SearchHost + ?Sized>(
        &mut self,
        host: &mut H,
        pattern: impl Into<String>,
    ) -> SearchOutcome {
        self.state.query_mut().set_pattern(pattern.into());
        self.recompute(host)
    }

    /// One or more mode flags changed.
    ///
    /// Enabling regex clears whole-word and vice versa; then recomputes with
    /// the existing pattern.
    pub fn on_mode_changed<H: SearchHost + ?Sized>(
        &mut self,
        host: &mut H,
        change: ModeChange,
    ) -> SearchOutcome {
        let mode = self.state.query_mut().mode_mut();
        mode.apply(change);
        debug_assert!(
            mode.is_consistent(),
            "whole-word and regex must never both be enabled"
        );
        self.recompute(host)
    }

    /// Re-run the current query, e.g. after new blocks were appended.
    pub fn refresh<H: SearchHost + ?Sized>(&mut self, host: &mut H) -> SearchOutcome {
        self.recompute(host)
    }

    /// Move to the next match, stopping at the last one.
    ///
    /// Returns the new 0-based index, or `None` (and does nothing) when idle.
    pub fn next<H: SearchHost + ?Sized>(&mut self, host: &mut H) -> Option<usize> {
        let position = self.state.step_forward().map(|m| m.scroll_position)?;
        trace!(index = ?self.state.current_index(), "Next match");
        host.scroll_to(position);
        self.state.current_index()
    }

    /// Move to the previous match, stopping at the first one.
    ///
    /// Returns the new 0-based index, or `None` (and does nothing) when idle.
    pub fn previous<H: SearchHost + ?Sized>(&mut self, host: &mut H) -> Option<usize> {
        let position = self.state.step_back().map(|m| m.scroll_position)?;
        trace!(index = ?self.state.current_index(), "Previous match");
        host.scroll_to(position);
        self.state.current_index()
    }

    /// Ask the host to hide the find bar. State is kept.
    pub fn close<H: SearchHost + ?Sized>(&mut self, host: &mut H) {
        debug!("Closing find bar");
        host.hide_find_bar();
    }

    fn recompute<H: SearchHost + ?Sized>(&mut self, host: &mut H) -> SearchOutcome {
        let query = self.state.query();
        let blank = query.is_blank();
        let result = {
            let corpus = host.corpus();
            find_matches(query, &corpus)
        };

        let matches = match result {
            Ok(matches) => matches,
            Err(err) => {
                warn!(error = %err, "Rejected search pattern; keeping previous matches");
                self.state.rewind();
                host.warn(&err);
                return SearchOutcome::Rejected;
            }
        };

        let outcome = match matches.len() {
            _ if blank => SearchOutcome::Cleared,
            0 => SearchOutcome::NoMatches,
            n => SearchOutcome::Found(n),
        };
        debug!(
            pattern = %query.pattern(),
            count = matches.len(),
            "Search recomputed"
        );

        self.state.replace_matches(matches);
        if let Some(first) = self.state.current_match() {
            host.scroll_to(first.scroll_position);
        }
        outcome
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
