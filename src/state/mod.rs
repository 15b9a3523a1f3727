//! Find-bar state machine (pure).
//!
//! All state transitions are testable without a display surface.

pub mod controller;
pub mod search;

// Re-export for convenience
pub use controller::{FindController, SearchHost, SearchOutcome};
pub use search::{SearchPhase, SearchState};
