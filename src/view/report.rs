//! Plain-text and JSON match reports.

use crate::model::{BlockIndex, Role, ScrollPosition, Transcript};
use crate::search::{MatchRecord, SearchQuery};
use crate::state::SearchState;
use crate::view::status::status_line;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns of context kept before the match.
const CONTEXT_BEFORE: usize = 30;
/// Columns of context kept after the match.
const CONTEXT_AFTER: usize = 40;
const ELLIPSIS: char = '…';

// ===== Snippet =====

/// One line of context around a match, with a caret marker aligned under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// The context line.
    pub line: String,
    /// Spaces then carets, aligned by display width.
    pub marker: String,
}

/// Build the snippet for `span` in `text`.
///
/// Only the line containing the start of the match is shown. A match that
/// runs past the end of that line is underlined up to the line end.
pub fn snippet(text: &str, span: Range<usize>) -> Snippet {
    let start = span.start.min(text.len());
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
    let hit_end = span.end.clamp(start, line_end);

    let prefix = keep_tail(&untab(&text[line_start..start]), CONTEXT_BEFORE).into_owned();
    let hit = untab(&text[start..hit_end]);
    let suffix = keep_head(&untab(&text[hit_end..line_end]), CONTEXT_AFTER).into_owned();

    let marker = format!(
        "{}{}",
        " ".repeat(prefix.width()),
        "^".repeat(hit.width().max(1))
    );

    Snippet {
        line: format!("{prefix}{hit}{suffix}"),
        marker,
    }
}

fn untab(s: &str) -> Cow<'_, str> {
    if s.contains('\t') {
        Cow::Owned(s.replace('\t', " "))
    } else {
        Cow::Borrowed(s)
    }
}

/// Keep the rightmost `max` columns, marking a cut with an ellipsis.
fn keep_tail(s: &str, max: usize) -> Cow<'_, str> {
    if s.width() <= max {
        return Cow::Borrowed(s);
    }
    let budget = max.saturating_sub(1);
    let mut width = 0;
    let mut cut = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        cut = i;
    }
    Cow::Owned(format!("{ELLIPSIS}{}", &s[cut..]))
}

/// Keep the leftmost `max` columns, marking a cut with an ellipsis.
fn keep_head(s: &str, max: usize) -> Cow<'_, str> {
    if s.width() <= max {
        return Cow::Borrowed(s);
    }
    let budget = max.saturating_sub(1);
    let mut width = 0;
    let mut cut = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        cut = i + c.len_utf8();
    }
    Cow::Owned(format!("{}{ELLIPSIS}", &s[..cut]))
}

// ===== Text report =====

/// Render every match with its context, marking the current one with `>`.
pub fn render_report(state: &SearchState, transcript: &Transcript) -> String {
    let mut out = String::new();
    let query = state.query();
    let _ = writeln!(out, "{:?}  {}", query.pattern(), status_line(state));

    let current = state.current_index();
    let total = state.result_count();
    for (i, record) in state.matches().iter().enumerate() {
        let pointer = if Some(i) == current { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{pointer} {}/{total}  {}",
            i + 1,
            block_header(transcript, record.block_index)
        );

        let text = transcript
            .get(record.block_index)
            .map_or("", |m| m.content());
        let snip = snippet(text, record.span.clone());
        let _ = writeln!(out, "    {}", snip.line);
        let _ = writeln!(out, "    {}", snip.marker);
    }
    out
}

fn block_header(transcript: &Transcript, index: BlockIndex) -> String {
    match transcript.get(index) {
        Some(message) => match message.timestamp() {
            Some(ts) => format!("block {index} ({}, {})", message.role(), ts.format("%Y-%m-%d %H:%M")),
            None => format!("block {index} ({})", message.role()),
        },
        None => format!("block {index}"),
    }
}

// ===== JSON report =====

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    query: &'a SearchQuery,
    result_count: usize,
    current_position: usize,
    matches: Vec<JsonMatch<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonMatch<'a> {
    block_index: BlockIndex,
    scroll_position: ScrollPosition,
    span: Range<usize>,
    role: Option<Role>,
    text: &'a str,
}

impl<'a> JsonMatch<'a> {
    fn new(record: &MatchRecord, transcript: &'a Transcript) -> Self {
        let message = transcript.get(record.block_index);
        let text = message
            .and_then(|m| m.content().get(record.span.clone()))
            .unwrap_or("");
        Self {
            block_index: record.block_index,
            scroll_position: record.scroll_position,
            span: record.span.clone(),
            role: message.map(|m| m.role()),
            text,
        }
    }
}

/// Render the search state as pretty-printed JSON.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn render_json(state: &SearchState, transcript: &Transcript) -> serde_json::Result<String> {
    let report = JsonReport {
        query: state.query(),
        result_count: state.result_count(),
        current_position: state.current_position(),
        matches: state
            .matches()
            .iter()
            .map(|record| JsonMatch::new(record, transcript))
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
