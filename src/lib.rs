//! chatfind
//!
//! Find-in-conversation for chat transcripts: a match finder over ordered text
//! blocks and a navigation controller that keeps the current match in view.
//!
//! The pure core lives in [`search`] and [`state`]; [`integration`] and
//! [`view`] adapt it to a terminal front end.

pub mod config;
pub mod integration;
pub mod logging;
pub mod model;
pub mod parser;
pub mod search;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
