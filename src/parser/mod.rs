//! Transcript parser.
//!
//! Accepts either JSONL (one message object per line) or a single JSON array
//! of message objects. Malformed JSONL lines are reported and skipped.

use crate::model::{InputError, Message, ParseError, Transcript};
use std::path::Path;
use tracing::warn;

/// Parse one JSONL line into a message.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_message(line: &str, line_number: usize) -> Result<Message, ParseError> {
    serde_json::from_str(line).map_err(|e| ParseError {
        line: line_number,
        reason: e.to_string(),
    })
}

/// Parse a whole transcript document.
///
/// Returns the messages that parsed and the errors for those that did not.
/// A document whose first non-blank character is `[` is treated as a JSON
/// array; if that array is malformed the transcript is empty and a single
/// error at line 1 is returned.
pub fn parse_transcript(contents: &str) -> (Transcript, Vec<ParseError>) {
    if contents.trim_start().starts_with('[') {
        return match serde_json::from_str::<Vec<Message>>(contents) {
            Ok(messages) => (messages.into_iter().collect(), Vec::new()),
            Err(e) => (
                Transcript::new(),
                vec![ParseError {
                    line: 1,
                    reason: e.to_string(),
                }],
            ),
        };
    }

    let mut transcript = Transcript::new();
    let mut errors = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_message(line, index + 1) {
            Ok(message) => {
                transcript.push(message);
            }
            Err(err) => errors.push(err),
        }
    }

    (transcript, errors)
}

/// Read and parse a transcript file.
///
/// Parse errors are non-fatal: each one is logged and the line skipped.
///
/// # Errors
///
/// [`InputError::FileNotFound`] if the path does not exist, [`InputError::Io`]
/// for any other read failure.
pub fn load_transcript(path: &Path) -> Result<(Transcript, Vec<ParseError>), InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let (transcript, errors) = parse_transcript(&contents);

    for err in &errors {
        warn!(path = %path.display(), line = err.line, reason = %err.reason, "Skipping malformed message");
    }

    Ok((transcript, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockIndex, Role};

    #[test]
    fn parses_jsonl_messages_in_order() {
        let contents = concat!(
            r#"{"role":"user","content":"What is Rust?"}"#,
            "\n",
            r#"{"role":"assistant","content":"A systems language."}"#,
            "\n",
        );

        let (transcript, errors) = parse_transcript(contents);

        assert!(errors.is_empty());
        assert_eq!(transcript.len(), 2);
        let reply = transcript.get(BlockIndex::new(1)).expect("second message");
        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.content(), "A systems language.");
    }

    #[test]
    fn skips_blank_lines() {
        let contents = "\n{\"role\":\"user\",\"content\":\"hi\"}\n\n";

        let (transcript, errors) = parse_transcript(contents);

        assert!(errors.is_empty());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn malformed_line_is_reported_and_skipped() {
        let contents = concat!(
            r#"{"role":"user","content":"first"}"#,
            "\n",
            "not json\n",
            r#"{"role":"assistant","content":"third"}"#,
        );

        let (transcript, errors) = parse_transcript(contents);

        assert_eq!(transcript.len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
    }

    #[test]
    fn unknown_role_is_a_parse_error() {
        let (transcript, errors) = parse_transcript(r#"{"role":"robot","content":"beep"}"#);

        assert!(transcript.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn parses_json_array_document() {
        let contents = r#"
            [
              {"role":"system","content":"You are helpful."},
              {"role":"user","content":"Hello"}
            ]
        "#;

        let (transcript, errors) = parse_transcript(contents);

        assert!(errors.is_empty());
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role(), Role::System);
    }

    #[test]
    fn malformed_json_array_yields_single_error() {
        let (transcript, errors) = parse_transcript(r#"[{"role":"user","content":"x"},"#);

        assert!(transcript.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn load_transcript_missing_file_is_file_not_found() {
        let result = load_transcript(Path::new("/nonexistent/chatfind/transcript.jsonl"));

        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn load_transcript_reads_file_from_disk() {
        let path = std::env::temp_dir().join("chatfind_parser_load_test.jsonl");
        std::fs::write(&path, "{\"role\":\"user\",\"content\":\"from disk\"}\n")
            .expect("write fixture");

        let (transcript, errors) = load_transcript(&path).expect("file exists");

        assert!(errors.is_empty());
        assert_eq!(transcript.messages()[0].content(), "from disk");

        std::fs::remove_file(path).ok();
    }
}
