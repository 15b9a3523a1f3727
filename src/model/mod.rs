//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod message;
pub mod transcript;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError, SearchError};
pub use identifiers::{BlockIndex, ScrollPosition};
pub use key_action::FindAction;
pub use message::{Message, Role};
pub use transcript::Transcript;
