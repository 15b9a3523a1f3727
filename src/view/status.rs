//! Find-bar status line.

use crate::config::KeyBindings;
use crate::model::FindAction;
use crate::state::SearchState;

const CASE_MARKER: &str = "[Aa]";
const WORD_MARKER: &str = "[ab]";
const REGEX_MARKER: &str = "[.*]";

/// "N results" label.
pub fn result_label(count: usize) -> String {
    format!("{count} results")
}

/// Counter plus active mode markers, e.g. `2/5 [Aa] [.*]`.
///
/// Idle shows `0 results`.
pub fn status_line(state: &SearchState) -> String {
    let mut line = if state.is_active() {
        format!("{}/{}", state.current_position(), state.result_count())
    } else {
        result_label(0)
    };

    let mode = state.query().mode();
    for (on, marker) in [
        (mode.case_sensitive(), CASE_MARKER),
        (mode.whole_word(), WORD_MARKER),
        (mode.regex(), REGEX_MARKER),
    ] {
        if on {
            line.push(' ');
            line.push_str(marker);
        }
    }
    line
}

/// One line per action, `key  label`, in a fixed order.
pub fn help_lines(bindings: &KeyBindings) -> Vec<String> {
    let mut lines = vec!["/text  set pattern".to_string(), "<enter>  next occurrence".to_string()];
    lines.extend(FindAction::ALL.iter().filter_map(|action| {
        bindings
            .key_for(*action)
            .map(|key| format!("{key}  {}", action.label()))
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FindController;
    use crate::search::{ModeChange, SearchMode};
    use crate::test_harness::RecordingHost;

    #[test]
    fn idle_status_shows_zero_results() {
        let controller = FindController::default();

        assert_eq!(status_line(controller.state()), "0 results");
    }

    #[test]
    fn active_status_shows_position_and_count() {
        let mut host = RecordingHost::new(&["x x x"]);
        let mut controller = FindController::default();
        controller.on_query_changed(&mut host, "x");
        controller.next(&mut host);

        assert_eq!(status_line(controller.state()), "2/3");
    }

    #[test]
    fn status_lists_enabled_modes() {
        let mut host = RecordingHost::new(&["abc"]);
        let mut controller = FindController::new(SearchMode::new(true, false, false));
        controller.on_mode_changed(&mut host, ModeChange::regex(true));

        assert_eq!(status_line(controller.state()), "0 results [Aa] [.*]");
    }

    #[test]
    fn result_label_formats_count() {
        assert_eq!(result_label(7), "7 results");
    }

    #[test]
    fn help_lists_every_bound_action() {
        let lines = help_lines(&KeyBindings::default());

        assert_eq!(lines.len(), 2 + FindAction::ALL.len());
        assert!(lines.contains(&"q  close".to_string()));
    }
}
