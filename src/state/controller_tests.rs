//! Tests for the find-bar navigation controller.

use super::*;
use crate::model::BlockIndex;
use crate::test_harness::RecordingHost;

// ===== Test Helpers =====

fn three_match_host() -> RecordingHost {
    RecordingHost::new(&["alpha beta", "nothing", "beta", "beta gamma"])
}

fn searched(host: &mut RecordingHost, pattern: &str) -> FindController {
    let mut controller = FindController::default();
    controller.on_query_changed(host, pattern);
    controller
}

// ===== on_query_changed Tests =====

#[test]
fn query_with_matches_activates_and_scrolls_to_first() {
    let mut host = three_match_host();
    let mut controller = FindController::default();

    let outcome = controller.on_query_changed(&mut host, "beta");

    assert_eq!(outcome, SearchOutcome::Found(3));
    assert!(controller.state().is_active());
    assert_eq!(controller.state().result_count(), 3);
    assert_eq!(controller.state().current_index(), Some(0));
    assert_eq!(host.scrolls.len(), 1);
    assert_eq!(host.last_scroll(), Some(ScrollPosition::TOP));
}

#[test]
fn query_without_matches_stays_idle_and_does_not_scroll() {
    let mut host = three_match_host();
    let mut controller = FindController::default();

    let outcome = controller.on_query_changed(&mut host, "zeta");

    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert!(!controller.state().is_active());
    assert!(host.scrolls.is_empty());
}

#[test]
fn clearing_pattern_goes_idle() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");

    let outcome = controller.on_query_changed(&mut host, "");

    assert_eq!(outcome, SearchOutcome::Cleared);
    assert!(!controller.state().is_active());
    assert_eq!(controller.state().result_count(), 0);
    assert_eq!(controller.state().current_position(), 0);
}

#[test]
fn whitespace_pattern_clears_even_in_regex_mode() {
    let mut host = three_match_host();
    let mut controller = FindController::new(SearchMode::new(false, false, true));
    controller.on_query_changed(&mut host, "beta");

    let outcome = controller.on_query_changed(&mut host, "   ");

    assert_eq!(outcome, SearchOutcome::Cleared);
    assert!(controller.state().matches().is_empty());
}

#[test]
fn new_query_resets_current_index() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    controller.next(&mut host);
    controller.next(&mut host);

    controller.on_query_changed(&mut host, "a");

    assert_eq!(controller.state().current_index(), Some(0));
}

#[test]
fn same_query_twice_is_idempotent() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    let first = controller.state().matches().to_vec();
    controller.next(&mut host);

    controller.on_query_changed(&mut host, "beta");

    assert_eq!(controller.state().matches(), first.as_slice());
    assert_eq!(controller.state().current_index(), Some(0));
}

// ===== Bad Pattern Tests =====

#[test]
fn bad_pattern_warns_keeps_matches_and_rewinds_to_first() {
    let mut host = three_match_host();
    let mut controller = FindController::new(SearchMode::new(false, false, true));
    controller.on_query_changed(&mut host, "be.a");
    controller.next(&mut host);
    let before = controller.state().matches().to_vec();
    let scrolls_before = host.scrolls.len();

    let outcome = controller.on_query_changed(&mut host, "\\");

    assert_eq!(outcome, SearchOutcome::Rejected);
    assert_eq!(host.warnings.len(), 1);
    assert_eq!(controller.state().matches(), before.as_slice());
    assert_eq!(controller.state().current_index(), Some(0));
    assert_eq!(host.scrolls.len(), scrolls_before, "no scroll on rejection");

    controller.next(&mut host);
    assert_eq!(controller.state().current_index(), Some(1), "navigation restarts from the first match");
}

#[test]
fn bad_pattern_while_idle_stays_idle() {
    let mut host = three_match_host();
    let mut controller = FindController::new(SearchMode::new(false, false, true));

    let outcome = controller.on_query_changed(&mut host, "(unclosed");

    assert_eq!(outcome, SearchOutcome::Rejected);
    assert!(!controller.state().is_active());
    assert!(matches!(
        host.warnings.as_slice(),
        [SearchError::BadPattern { .. }]
    ));
}

#[test]
fn rejected_pattern_is_still_remembered() {
    let mut host = RecordingHost::new(&["a \\ b"]);
    let mut controller = FindController::new(SearchMode::new(false, false, true));
    controller.on_query_changed(&mut host, "\\");

    let outcome = controller.on_mode_changed(&mut host, ModeChange::regex(false));

    assert_eq!(controller.state().query().pattern(), "\\");
    assert_eq!(outcome, SearchOutcome::Found(1));
}

// ===== on_mode_changed Tests =====

#[test]
fn enabling_regex_turns_whole_word_off() {
    let mut host = three_match_host();
    let mut controller = FindController::new(SearchMode::new(false, true, false));

    controller.on_mode_changed(&mut host, ModeChange::regex(true));

    let mode = controller.state().query().mode();
    assert!(mode.regex());
    assert!(!mode.whole_word());
}

#[test]
fn enabling_whole_word_turns_regex_off() {
    let mut host = three_match_host();
    let mut controller = FindController::new(SearchMode::new(false, false, true));

    controller.on_mode_changed(&mut host, ModeChange::whole_word(true));

    let mode = controller.state().query().mode();
    assert!(mode.whole_word());
    assert!(!mode.regex());
}

#[test]
fn mode_change_recomputes_with_existing_pattern() {
    let mut host = RecordingHost::new(&["Beta", "beta"]);
    let mut controller = searched(&mut host, "beta");
    assert_eq!(controller.state().result_count(), 2);

    let outcome = controller.on_mode_changed(&mut host, ModeChange::case_sensitive(true));

    assert_eq!(outcome, SearchOutcome::Found(1));
    assert_eq!(
        controller.state().current_match().map(|m| m.block_index),
        Some(BlockIndex::new(1))
    );
}

#[test]
fn mode_change_resets_current_index() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    controller.next(&mut host);

    controller.on_mode_changed(&mut host, ModeChange::whole_word(true));

    assert_eq!(controller.state().current_index(), Some(0));
}

#[test]
fn whole_word_mode_can_deactivate_search() {
    let mut host = RecordingHost::new(&["category"]);
    let mut controller = searched(&mut host, "cat");
    assert!(controller.state().is_active());

    let outcome = controller.on_mode_changed(&mut host, ModeChange::whole_word(true));

    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert!(!controller.state().is_active());
}

// ===== next / previous Tests =====

#[test]
fn previous_at_first_match_stays_at_first() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");

    let index = controller.previous(&mut host);

    assert_eq!(index, Some(0));
    assert_eq!(controller.state().current_index(), Some(0));
}

#[test]
fn next_at_last_match_stays_at_last() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    controller.next(&mut host);
    controller.next(&mut host);

    let index = controller.next(&mut host);

    assert_eq!(index, Some(2));
    assert_eq!(controller.state().current_index(), Some(2));
}

#[test]
fn next_scrolls_to_the_new_current_match() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");

    controller.next(&mut host);

    let expected = controller.state().current_match().map(|m| m.scroll_position);
    assert_eq!(host.last_scroll(), expected);
    assert_eq!(
        controller.state().current_match().map(|m| m.block_index),
        Some(BlockIndex::new(2))
    );
}

#[test]
fn clamped_navigation_still_requests_scroll() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    let scrolls_before = host.scrolls.len();

    controller.previous(&mut host);

    assert_eq!(host.scrolls.len(), scrolls_before + 1);
}

#[test]
fn navigation_while_idle_is_noop() {
    let mut host = three_match_host();
    let mut controller = FindController::default();

    assert_eq!(controller.next(&mut host), None);
    assert_eq!(controller.previous(&mut host), None);
    assert!(host.scrolls.is_empty());
    assert!(!controller.state().is_active());
}

#[test]
fn navigation_does_not_recompute() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    host.append("beta beta");

    controller.next(&mut host);

    assert_eq!(controller.state().result_count(), 3);
}

// ===== refresh / close Tests =====

#[test]
fn refresh_picks_up_appended_blocks() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    host.append("late beta");

    let outcome = controller.refresh(&mut host);

    assert_eq!(outcome, SearchOutcome::Found(4));
    assert_eq!(
        controller.state().matches().last().map(|m| m.block_index),
        Some(BlockIndex::new(4))
    );
}

#[test]
fn close_hides_find_bar_and_keeps_state() {
    let mut host = three_match_host();
    let mut controller = searched(&mut host, "beta");
    controller.next(&mut host);

    controller.close(&mut host);

    assert_eq!(host.hide_requests, 1);
    assert_eq!(controller.state().result_count(), 3);
    assert_eq!(controller.state().current_index(), Some(1));
}
