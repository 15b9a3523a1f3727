//! Text rendering for the command-line host.
//!
//! Formatting here is for humans; the search state itself lives in
//! [`crate::state`].

pub mod report;
pub mod status;

pub use report::{render_json, render_report, snippet, Snippet};
pub use status::{help_lines, result_label, status_line};
