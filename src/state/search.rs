//! Search state machine.
//!
//! `SearchState` pairs the last submitted query with a [`SearchPhase`], a sum
//! type with two states:
//! - Idle: no matches, next/previous disabled
//! - Active: at least one match and a valid current index

use crate::search::{MatchRecord, SearchQuery};

// ===== SearchPhase =====

/// Match-list state. Sum type enforces that `Active` always has a valid index.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPhase {
    /// No matches.
    #[default]
    Idle,
    /// One or more matches.
    Active {
        /// Non-empty, in navigation order.
        matches: Vec<MatchRecord>,
        /// Always `< matches.len()`.
        current: usize,
    },
}

// ===== SearchState =====

/// Everything the find bar remembers between events.
///
/// Read-only outside the crate; [`FindController`](crate::state::FindController)
/// is the only writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: SearchQuery,
    phase: SearchPhase,
}

impl SearchState {
    /// Fresh state with an empty pattern.
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            phase: SearchPhase::Idle,
        }
    }

    /// The most recently submitted query.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Get the current phase.
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// True when next/previous should be enabled.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, SearchPhase::Active { .. })
    }

    /// All matches in navigation order (empty when idle).
    pub fn matches(&self) -> &[MatchRecord] {
        match &self.phase {
            SearchPhase::Idle => &[],
            SearchPhase::Active { matches, .. } => matches,
        }
    }

    /// Number of matches, for the "N results" label.
    pub fn result_count(&self) -> usize {
        self.matches().len()
    }

    /// 0-based index of the current match, `None` when idle.
    pub fn current_index(&self) -> Option<usize> {
        match &self.phase {
            SearchPhase::Idle => None,
            SearchPhase::Active { current, .. } => Some(*current),
        }
    }

    /// 1-based position of the current match, 0 when idle.
    pub fn current_position(&self) -> usize {
        self.current_index().map_or(0, |i| i + 1)
    }

    /// The current match, `None` when idle.
    pub fn current_match(&self) -> Option<&MatchRecord> {
        match &self.phase {
            SearchPhase::Idle => None,
            SearchPhase::Active { matches, current } => matches.get(*current),
        }
    }

    pub(crate) fn query_mut(&mut self) -> &mut SearchQuery {
        &mut self.query
    }

    /// Replace the match list wholesale. Resets the current index to 0.
    pub(crate) fn replace_matches(&mut self, matches: Vec<MatchRecord>) {
        self.phase = if matches.is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Active {
                matches,
                current: 0,
            }
        };
    }

    /// Move back to the first match, keeping the list. No-op when idle.
    pub(crate) fn rewind(&mut self) {
        if let SearchPhase::Active { current, .. } = &mut self.phase {
            *current = 0;
        }
    }

    /// Move forward one match, stopping at the last. Returns the new current match.
    pub(crate) fn step_forward(&mut self) -> Option<&MatchRecord> {
        if let SearchPhase::Active { matches, current } = &mut self.phase {
            *current = (*current + 1).min(matches.len() - 1);
        }
        self.current_match()
    }

    /// Move back one match, stopping at the first. Returns the new current match.
    pub(crate) fn step_back(&mut self) -> Option<&MatchRecord> {
        if let SearchPhase::Active { current, .. } = &mut self.phase {
            *current = current.saturating_sub(1);
        }
        self.current_match()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
