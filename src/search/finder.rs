//! Match finder.
//!
//! Compiles a [`SearchQuery`] into a [`Matcher`] and scans a corpus of message
//! blocks for occurrences. Pure: no state, no host access.

use crate::model::{BlockIndex, ScrollPosition, SearchError};
use crate::search::SearchQuery;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::ops::Range;

/// Regex-mode pattern that is always rejected.
const BARE_BACKSLASH: &str = "\\";

// ===== TextBlock =====

/// One message block of a corpus snapshot, borrowed from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock<'a> {
    /// Which block this text belongs to.
    pub index: BlockIndex,
    /// The block's displayed text.
    pub text: &'a str,
}

impl<'a> TextBlock<'a> {
    /// Create a corpus block.
    pub fn new(index: BlockIndex, text: &'a str) -> Self {
        Self { index, text }
    }
}

// ===== MatchRecord =====

/// A single occurrence found in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Block the occurrence was found in.
    pub block_index: BlockIndex,
    /// Where the host should scroll to bring the block into view.
    pub scroll_position: ScrollPosition,
    /// Byte range of the occurrence inside the block text.
    pub span: Range<usize>,
}

// ===== Matcher =====

/// A compiled query.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-sensitive plain substring.
    Literal(String),
    /// Everything else: regex mode, whole-word, case-insensitive plain.
    Pattern(Regex),
}

impl Matcher {
    /// Compile a query.
    ///
    /// Does not check for blank patterns; callers that need the
    /// "blank means no search" rule use [`find_matches`].
    ///
    /// # Errors
    ///
    /// [`SearchError::BadPattern`] when regex mode is on and the pattern is a
    /// lone backslash or fails to compile.
    pub fn compile(query: &SearchQuery) -> Result<Self, SearchError> {
        let mode = query.mode();
        let pattern = query.pattern();

        if mode.regex() {
            if pattern == BARE_BACKSLASH {
                return Err(bad_pattern(pattern, "a lone backslash is not a valid pattern"));
            }
            return build_regex(pattern, pattern, mode.case_sensitive()).map(Matcher::Pattern);
        }

        if mode.whole_word() {
            return build_regex(pattern, &whole_word_source(pattern), mode.case_sensitive())
                .map(Matcher::Pattern);
        }

        if mode.case_sensitive() {
            Ok(Matcher::Literal(pattern.to_string()))
        } else {
            build_regex(pattern, &regex::escape(pattern), false).map(Matcher::Pattern)
        }
    }

    /// Byte ranges of every non-overlapping, non-empty occurrence in `text`.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Matcher::Literal(needle) => text
                .match_indices(needle.as_str())
                .filter(|(_, m)| !m.is_empty())
                .map(|(start, m)| start..start + m.len())
                .collect(),
            Matcher::Pattern(re) => re
                .find_iter(text)
                .filter(|m| m.start() < m.end())
                .map(|m| m.start()..m.end())
                .collect(),
        }
    }

    /// Scan every block in corpus order.
    pub fn scan(&self, corpus: &[TextBlock<'_>]) -> Vec<MatchRecord> {
        let len = corpus.len();
        corpus
            .iter()
            .enumerate()
            .flat_map(|(ordinal, block)| {
                let scroll_position = ScrollPosition::for_block(ordinal, len);
                let block_index = block.index;
                self.spans(block.text)
                    .into_iter()
                    .map(move |span| MatchRecord {
                        block_index,
                        scroll_position,
                        span,
                    })
            })
            .collect()
    }
}

// ===== Search Execution =====

/// Find every occurrence of `query` in `corpus`.
///
/// A blank pattern yields no matches without compiling anything. Results are
/// ordered by block, then by position inside the block, and are identical for
/// identical inputs.
///
/// # Errors
///
/// [`SearchError::BadPattern`] if the query cannot be compiled. Callers keep
/// whatever matches they had before.
pub fn find_matches(
    query: &SearchQuery,
    corpus: &[TextBlock<'_>],
) -> Result<Vec<MatchRecord>, SearchError> {
    if query.is_blank() {
        return Ok(Vec::new());
    }

    let matcher = Matcher::compile(query)?;
    Ok(matcher.scan(corpus))
}

/// Escaped literal that must not touch a word character on either side.
///
/// A `\b` after a non-word character would demand a word character next, so
/// edges that are not word characters use `\B` instead. `c++` then matches in
/// `c++ code` but not in `c++x`.
fn whole_word_source(pattern: &str) -> String {
    let edge = |c: Option<char>| match c {
        Some(c) if is_word_char(c) => r"\b",
        Some(_) => r"\B",
        None => "",
    };
    format!(
        "{}{}{}",
        edge(pattern.chars().next()),
        regex::escape(pattern),
        edge(pattern.chars().next_back())
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn build_regex(original: &str, source: &str, case_sensitive: bool) -> Result<Regex, SearchError> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| bad_pattern(original, e.to_string()))
}

fn bad_pattern(pattern: &str, reason: impl Into<String>) -> SearchError {
    SearchError::BadPattern {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
