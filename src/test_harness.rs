//! Test doubles shared by unit tests.

use crate::model::{BlockIndex, ScrollPosition, SearchError};
use crate::search::TextBlock;
use crate::state::SearchHost;

/// A `SearchHost` that records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub blocks: Vec<String>,
    pub scrolls: Vec<ScrollPosition>,
    pub warnings: Vec<SearchError>,
    pub hide_requests: usize,
}

impl RecordingHost {
    pub fn new(blocks: &[&str]) -> Self {
        Self {
            blocks: blocks.iter().map(|b| b.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn append(&mut self, block: &str) {
        self.blocks.push(block.to_string());
    }

    pub fn last_scroll(&self) -> Option<ScrollPosition> {
        self.scrolls.last().copied()
    }
}

impl SearchHost for RecordingHost {
    fn corpus(&self) -> Vec<TextBlock<'_>> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, b)| TextBlock::new(BlockIndex::new(i), b))
            .collect()
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.scrolls.push(position);
    }

    fn warn(&mut self, error: &SearchError) {
        self.warnings.push(error.clone());
    }

    fn hide_find_bar(&mut self) {
        self.hide_requests += 1;
    }
}
