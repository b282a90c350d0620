use super::*;
use crate::net::types::Recipient;
use crate::state::roster::Roster;

// =============================================================
// Helpers
// =============================================================

fn recipient(id: &str, name: &str) -> Recipient {
    Recipient { id: id.to_owned(), name: name.to_owned(), color: "#000000".to_owned() }
}

fn two_recipients() -> Roster {
    Roster::new(vec![recipient("r1", "Anna Berg"), recipient("r2", "Carl Dahl")])
}

fn four_recipients() -> Roster {
    Roster::new(vec![
        recipient("r1", "Anna Berg"),
        recipient("r2", "Carl Dahl"),
        recipient("r3", "nobody"),
        recipient("r4", "Erik Falk"),
    ])
}

/// Mirror a checkbox change into the roster and the tracker.
fn toggle(tracker: &mut SelectionTracker, roster: &mut Roster, id: &str, checked: bool) -> ToggleOutcome {
    roster.set_checked(id, checked);
    tracker.on_toggle(roster, id, checked)
}

fn ready(roster: &Roster, policy: SelectionPolicy) -> SelectionTracker {
    let mut tracker = SelectionTracker::new(policy);
    tracker.initialize(roster);
    tracker
}

/// Expected text for the checked, labelled recipients in registration order.
fn expected_render(roster: &Roster, empty: EmptySelection) -> String {
    let labels: Vec<String> = roster
        .checked_ids()
        .iter()
        .filter_map(|id| roster.acronym(id))
        .collect();
    if labels.is_empty() {
        empty.text().to_owned()
    } else {
        format!("{OPEN_PREFIX}{}{CLOSE_BRACKET}", labels.join(SEPARATOR))
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_tracker_is_uninitialized_and_rendering() {
    let tracker = SelectionTracker::default();
    assert_eq!(tracker.phase(), Phase::Uninitialized);
    assert_eq!(tracker.render(), RENDERING_TEXT);
    assert_eq!(tracker.view(), StatusView::Rendering);
}

#[test]
fn initialize_with_nothing_checked_shows_sentinel() {
    let roster = two_recipients();
    let tracker = ready(&roster, SelectionPolicy::default());
    assert_eq!(tracker.phase(), Phase::Ready);
    assert_eq!(tracker.render(), "> []");
    assert!(tracker.is_well_formed());
}

#[test]
fn no_recipients_sentinel_is_configurable() {
    let roster = two_recipients();
    let policy = SelectionPolicy { empty: EmptySelection::NoRecipients, ..SelectionPolicy::default() };
    let tracker = ready(&roster, policy);
    assert_eq!(tracker.render(), "no recipients");
}

#[test]
fn initialize_lists_checked_in_registration_order() {
    let mut roster = four_recipients();
    roster.set_checked("r4", true);
    roster.set_checked("r1", true);
    let tracker = ready(&roster, SelectionPolicy::default());
    assert_eq!(tracker.render(), "> [AB,EF]");
    assert!(tracker.is_well_formed());
}

#[test]
fn initialize_skips_unresolvable_labels() {
    let mut roster = four_recipients();
    roster.set_checked("r3", true);
    let tracker = ready(&roster, SelectionPolicy::default());
    assert_eq!(tracker.render(), "> []");

    roster.set_checked("r2", true);
    let tracker = ready(&roster, SelectionPolicy::default());
    assert_eq!(tracker.render(), "> [CD]");
}

#[test]
fn early_toggle_forces_rebuild_by_default() {
    let mut roster = two_recipients();
    let mut tracker = SelectionTracker::default();
    let outcome = toggle(&mut tracker, &mut roster, "r2", true);
    assert_eq!(outcome, ToggleOutcome::Rebuilt);
    assert_eq!(tracker.phase(), Phase::Ready);
    assert_eq!(tracker.render(), "> [CD]");
}

#[test]
fn early_toggle_can_be_deferred() {
    let mut roster = two_recipients();
    let policy = SelectionPolicy { early_toggle: EarlyToggle::Ignore, ..SelectionPolicy::default() };
    let mut tracker = SelectionTracker::new(policy);
    let outcome = toggle(&mut tracker, &mut roster, "r1", true);
    assert_eq!(outcome, ToggleOutcome::Skipped(SkipReason::Deferred));
    assert_eq!(tracker.render(), RENDERING_TEXT);

    tracker.initialize(&roster);
    assert_eq!(tracker.render(), "> [AB]");
}

// =============================================================
// Incremental toggles
// =============================================================

#[test]
fn check_and_uncheck_scenario() {
    let mut roster = two_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());

    assert_eq!(toggle(&mut tracker, &mut roster, "r1", true), ToggleOutcome::Placed);
    assert_eq!(tracker.render(), "> [AB]");
    toggle(&mut tracker, &mut roster, "r2", true);
    assert_eq!(tracker.render(), "> [AB,CD]");
    assert_eq!(toggle(&mut tracker, &mut roster, "r1", false), ToggleOutcome::Removed);
    assert_eq!(tracker.render(), "> [CD]");
    toggle(&mut tracker, &mut roster, "r2", false);
    assert_eq!(tracker.render(), "> []");
    assert!(tracker.is_well_formed());
}

#[test]
fn out_of_order_checks_keep_registration_order() {
    let mut roster = four_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r4", true);
    toggle(&mut tracker, &mut roster, "r1", true);
    toggle(&mut tracker, &mut roster, "r2", true);
    assert_eq!(tracker.render(), "> [AB,CD,EF]");
    toggle(&mut tracker, &mut roster, "r2", false);
    assert_eq!(tracker.render(), "> [AB,EF]");
    assert!(tracker.is_well_formed());
}

#[test]
fn toggle_order_appends_in_check_order() {
    let mut roster = four_recipients();
    let policy = SelectionPolicy { order: LabelOrder::Toggle, ..SelectionPolicy::default() };
    let mut tracker = ready(&roster, policy);
    toggle(&mut tracker, &mut roster, "r4", true);
    toggle(&mut tracker, &mut roster, "r1", true);
    toggle(&mut tracker, &mut roster, "r2", true);
    assert_eq!(tracker.render(), "> [EF,AB,CD]");
    toggle(&mut tracker, &mut roster, "r4", false);
    assert_eq!(tracker.render(), "> [AB,CD]");
    assert!(tracker.is_well_formed());
}

#[test]
fn removing_first_label_drops_following_separator() {
    let mut roster = four_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r1", true);
    toggle(&mut tracker, &mut roster, "r2", true);
    toggle(&mut tracker, &mut roster, "r4", true);
    toggle(&mut tracker, &mut roster, "r1", false);
    assert_eq!(tracker.render(), "> [CD,EF]");
    toggle(&mut tracker, &mut roster, "r4", false);
    assert_eq!(tracker.render(), "> [CD]");
}

#[test]
fn toggle_on_then_off_restores_prior_tokens() {
    let mut roster = four_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r1", true);
    toggle(&mut tracker, &mut roster, "r4", true);
    let before: Vec<Token> = match tracker.view() {
        StatusView::List(tokens) => tokens.into_iter().map(|t| t.token).collect(),
        other => panic!("expected a list, got {other:?}"),
    };
    let cached = tracker.cached_label_count();

    toggle(&mut tracker, &mut roster, "r2", true);
    toggle(&mut tracker, &mut roster, "r2", false);

    let after: Vec<Token> = match tracker.view() {
        StatusView::List(tokens) => tokens.into_iter().map(|t| t.token).collect(),
        other => panic!("expected a list, got {other:?}"),
    };
    assert_eq!(before, after);
    assert_eq!(tracker.cached_label_count(), cached + 1);
}

#[test]
fn unresolvable_label_is_a_safe_no_op() {
    let mut roster = four_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r1", true);
    let outcome = toggle(&mut tracker, &mut roster, "r3", true);
    assert_eq!(outcome, ToggleOutcome::Skipped(SkipReason::Unresolvable));
    assert_eq!(tracker.render(), "> [AB]");
    assert_eq!(roster.checked_ids(), vec!["r1".to_owned(), "r3".to_owned()]);
    let outcome = toggle(&mut tracker, &mut roster, "r3", false);
    assert_eq!(outcome, ToggleOutcome::Skipped(SkipReason::NotPlaced));
    assert!(tracker.is_well_formed());
}

#[test]
fn uncheck_of_never_checked_recipient_is_a_no_op() {
    let mut roster = two_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    assert_eq!(toggle(&mut tracker, &mut roster, "r2", false), ToggleOutcome::Skipped(SkipReason::NotPlaced));
    assert_eq!(toggle(&mut tracker, &mut roster, "ghost", false), ToggleOutcome::Skipped(SkipReason::NotPlaced));
    assert_eq!(tracker.render(), "> []");
}

#[test]
fn double_check_does_not_duplicate_label() {
    let mut roster = two_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r1", true);
    assert_eq!(toggle(&mut tracker, &mut roster, "r1", true), ToggleOutcome::Skipped(SkipReason::AlreadyPlaced));
    assert_eq!(tracker.render(), "> [AB]");
}

#[test]
fn label_nodes_keep_their_keys_across_toggles() {
    let mut roster = two_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r1", true);
    let key_of_r1 = |tracker: &SelectionTracker| match tracker.view() {
        StatusView::List(tokens) => tokens
            .into_iter()
            .find(|t| matches!(&t.token, Token::Label { recipient_id, .. } if recipient_id == "r1"))
            .map(|t| t.key),
        _ => None,
    };
    let first = key_of_r1(&tracker);
    toggle(&mut tracker, &mut roster, "r1", false);
    toggle(&mut tracker, &mut roster, "r2", true);
    toggle(&mut tracker, &mut roster, "r1", true);
    assert!(first.is_some());
    assert_eq!(key_of_r1(&tracker), first);
}

#[test]
fn rebuild_after_reset_matches_live_state() {
    let mut roster = four_recipients();
    let mut tracker = ready(&roster, SelectionPolicy::default());
    toggle(&mut tracker, &mut roster, "r2", true);
    toggle(&mut tracker, &mut roster, "r4", true);
    roster.clear_checks();
    tracker.initialize(&roster);
    assert_eq!(tracker.render(), "> []");
    toggle(&mut tracker, &mut roster, "r4", true);
    assert_eq!(tracker.render(), "> [EF]");
    assert!(tracker.is_well_formed());
}

// =============================================================
// Invariant over every short toggle sequence
// =============================================================

#[test]
fn every_toggle_sequence_matches_registration_order_render() {
    const IDS: [&str; 4] = ["r1", "r2", "r3", "r4"];
    let events: Vec<(&str, bool)> = IDS.iter().flat_map(|id| [(*id, true), (*id, false)]).collect();
    let len = 5_u32;
    let total = events.len().pow(len);

    for mut seed in 0..total {
        let mut roster = four_recipients();
        let mut tracker = ready(&roster, SelectionPolicy::default());
        for _ in 0..len {
            let (id, checked) = events[seed % events.len()];
            seed /= events.len();
            toggle(&mut tracker, &mut roster, id, checked);
            assert!(tracker.is_well_formed(), "malformed after {id}={checked}");
            assert_eq!(tracker.render(), expected_render(&roster, EmptySelection::Brackets));
        }
        let mut rebuilt = SelectionTracker::default();
        rebuilt.initialize(&roster);
        assert_eq!(rebuilt.render(), tracker.render());
    }
}

#[test]
fn placeholder_and_tokens_follow_phase() {
    let mut roster = two_recipients();
    let mut tracker = SelectionTracker::default();
    assert_eq!(tracker.placeholder(), Some(RENDERING_TEXT));
    assert!(tracker.tokens().is_empty());

    tracker.initialize(&roster);
    assert_eq!(tracker.placeholder(), Some("> []"));
    assert!(!tracker.is_listing());

    toggle(&mut tracker, &mut roster, "r2", true);
    assert_eq!(tracker.placeholder(), None);
    let texts: Vec<String> = tracker.tokens().iter().map(|t| t.token.text().to_owned()).collect();
    assert_eq!(texts, vec!["> [", "CD", "]"]);
}
