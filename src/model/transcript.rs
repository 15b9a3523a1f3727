//! Ordered sequence of displayed messages.

use crate::model::{BlockIndex, Message};
use crate::search::TextBlock;

/// A conversation as displayed: messages in display order.
///
/// The message's position is its [`BlockIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, returning its block index.
    pub fn push(&mut self, message: Message) -> BlockIndex {
        self.messages.push(message);
        BlockIndex::new(self.messages.len() - 1)
    }

    /// Look up a message by block index.
    pub fn get(&self, index: BlockIndex) -> Option<&Message> {
        self.messages.get(index.get())
    }

    /// Mutable access, used to append streamed chunks to the last reply.
    pub fn get_mut(&mut self, index: BlockIndex) -> Option<&mut Message> {
        self.messages.get_mut(index.get())
    }

    /// Get all messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of message blocks.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Borrowed snapshot of every block's text, in display order.
    pub fn corpus(&self) -> Vec<TextBlock<'_>> {
        self.messages
            .iter()
            .enumerate()
            .map(|(i, m)| TextBlock::new(BlockIndex::new(i), m.content()))
            .collect()
    }
}

impl FromIterator<Message> for Transcript {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
