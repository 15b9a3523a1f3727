//! Find-in-conversation search (pure).
//!
//! Query compilation and corpus scanning. Owning the match list and the
//! current position is the job of [`crate::state::FindController`].

pub mod finder;
pub mod query;

// Re-export for convenience
pub use finder::{find_matches, MatchRecord, Matcher, TextBlock};
pub use query::{ModeChange, SearchMode, SearchQuery};
