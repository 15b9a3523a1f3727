//! Host integration for the command-line front end.
//!
//! [`TranscriptHost`] is the display surface the find bar searches: it owns the
//! transcript and records scroll, hide and warning requests. [`handle_line`]
//! and [`run_interactive`] drive a [`FindController`] from typed commands.

use crate::config::KeyBindings;
use crate::model::{BlockIndex, FindAction, Message, ScrollPosition, SearchError, Transcript};
use crate::search::{ModeChange, TextBlock};
use crate::state::{FindController, SearchHost};
use crate::view::{help_lines, snippet, status_line};
use std::io::{self, BufRead, Write};
use tracing::debug;

// ===== TranscriptHost =====

/// A transcript plus the view state the find bar manipulates.
#[derive(Debug, Clone)]
pub struct TranscriptHost {
    transcript: Transcript,
    scroll: ScrollPosition,
    find_bar_visible: bool,
    warnings: Vec<String>,
}

impl TranscriptHost {
    /// Wrap a transcript. The find bar starts visible, scrolled to the top.
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            scroll: ScrollPosition::TOP,
            find_bar_visible: true,
            warnings: Vec::new(),
        }
    }

    /// Get the displayed transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Last position the find bar scrolled to.
    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    /// False after a close until [`Self::show_find_bar`].
    pub fn is_find_bar_visible(&self) -> bool {
        self.find_bar_visible
    }

    /// Re-show the find bar after a close.
    pub fn show_find_bar(&mut self) {
        self.find_bar_visible = true;
    }

    /// Drain pending user-visible warnings.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Append a new message block (e.g. a reply arriving).
    ///
    /// Existing matches are not updated until the next recompute.
    pub fn append_message(&mut self, message: Message) -> BlockIndex {
        self.transcript.push(message)
    }

    /// Append a streamed chunk to the last message. Returns false if empty.
    pub fn append_chunk(&mut self, chunk: &str) -> bool {
        let Some(last) = self.transcript.len().checked_sub(1) else {
            return false;
        };
        match self.transcript.get_mut(BlockIndex::new(last)) {
            Some(message) => {
                message.push_str(chunk);
                true
            }
            None => false,
        }
    }
}

impl SearchHost for TranscriptHost {
    fn corpus(&self) -> Vec<TextBlock<'_>> {
        self.transcript.corpus()
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }

    fn warn(&mut self, error: &SearchError) {
        self.warnings.push(error.to_string());
    }

    fn hide_find_bar(&mut self) {
        self.find_bar_visible = false;
    }
}

// ===== Command handling =====

/// What the command loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep reading commands.
    Continue,
    /// The line was not a pattern, an empty line, or a bound key.
    Unrecognized,
    /// The find bar was closed.
    Exit,
}

/// Apply one typed command.
///
/// - `/text` sets the pattern to `text` (everything after the slash)
/// - an empty line moves to the next match
/// - anything else is looked up in `bindings`
pub fn handle_line<H: SearchHost + ?Sized>(
    controller: &mut FindController,
    host: &mut H,
    bindings: &KeyBindings,
    line: &str,
) -> LoopControl {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(pattern) = line.strip_prefix('/') {
        controller.on_query_changed(host, pattern);
        return LoopControl::Continue;
    }

    let command = line.trim();
    if command.is_empty() {
        controller.next(host);
        return LoopControl::Continue;
    }

    let Some(action) = bindings.get(command) else {
        debug!(command, "Unrecognized find-bar command");
        return LoopControl::Unrecognized;
    };

    let mode = controller.state().query().mode();
    match action {
        FindAction::NextMatch => {
            controller.next(host);
        }
        FindAction::PrevMatch => {
            controller.previous(host);
        }
        FindAction::ToggleCase => {
            controller.on_mode_changed(host, ModeChange::case_sensitive(!mode.case_sensitive()));
        }
        FindAction::ToggleWholeWord => {
            controller.on_mode_changed(host, ModeChange::whole_word(!mode.whole_word()));
        }
        FindAction::ToggleRegex => {
            controller.on_mode_changed(host, ModeChange::regex(!mode.regex()));
        }
        FindAction::Refresh => {
            controller.refresh(host);
        }
        FindAction::Close => {
            controller.close(host);
            return LoopControl::Exit;
        }
    }
    LoopControl::Continue
}

/// Run a line-oriented find session until close or end of input.
///
/// Prints the help once, then after every command any warnings, the status
/// line and the current match in context.
///
/// # Errors
///
/// Propagates I/O errors from reading `input` or writing `output`.
pub fn run_interactive<R: BufRead, W: Write>(
    controller: &mut FindController,
    host: &mut TranscriptHost,
    bindings: &KeyBindings,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in help_lines(bindings) {
        writeln!(output, "  {line}")?;
    }

    for line in input.lines() {
        let line = line?;
        let control = handle_line(controller, host, bindings, &line);

        for warning in host.take_warnings() {
            writeln!(output, "warning: {warning}")?;
        }
        if control == LoopControl::Unrecognized {
            writeln!(output, "unknown command: {}", line.trim())?;
        }

        let state = controller.state();
        writeln!(output, "{}", status_line(state))?;
        if let Some(current) = state.current_match() {
            let text = host
                .transcript()
                .get(current.block_index)
                .map_or("", |m| m.content());
            let snip = snippet(text, current.span.clone());
            writeln!(output, "    {}", snip.line)?;
            writeln!(output, "    {}", snip.marker)?;
        }

        if control == LoopControl::Exit {
            break;
        }
    }
    output.flush()
}
