#![allow(clippy::float_cmp)]

use super::*;
use crate::scheduler::ManualScheduler;

fn card() -> FlipCard {
    FlipCard::new(true, FlipTimings::default())
}

// =============================================================
// Height
// =============================================================

#[test]
fn container_height_is_taller_face() {
    assert_eq!(container_height(320.0, 480.0), 480.0);
    assert_eq!(container_height(500.0, 200.0), 500.0);
    assert_eq!(container_height(300.0, 300.0), 300.0);
}

#[test]
fn container_height_tracks_back_face_growth() {
    let front = 320.0;
    let mut back = 280.0;
    assert_eq!(container_height(front, back), 320.0);
    back = 610.0;
    assert_eq!(container_height(front, back), 610.0);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn enabled_card_measures_on_start() {
    assert_eq!(card().initial_actions(), vec![FlipAction::RecalculateHeight]);
}

#[test]
fn open_flips_measures_and_focuses_close_after_transition() {
    let mut c = card();
    let actions = c.open();
    assert!(c.is_flipped());
    assert_eq!(
        actions,
        vec![
            FlipAction::SetFlipped(true),
            FlipAction::RecalculateHeight,
            FlipAction::ScheduleFocus { target: FocusTarget::Close, delay_ms: 600 },
        ]
    );
}

#[test]
fn close_reverses_and_focuses_toggle() {
    let mut c = card();
    c.open();
    let actions = c.close();
    assert!(!c.is_flipped());
    assert_eq!(actions[0], FlipAction::SetFlipped(false));
    assert!(actions.contains(&FlipAction::RecalculateHeight));
    assert!(actions.contains(&FlipAction::ScheduleFocus { target: FocusTarget::Toggle, delay_ms: 600 }));
}

#[test]
fn repeated_open_or_close_is_a_no_op() {
    let mut c = card();
    assert!(c.close().is_empty());
    c.open();
    assert!(c.open().is_empty());
}

#[test]
fn focus_moves_only_after_transition_in_virtual_time() {
    let mut c = card();
    let mut sched = ManualScheduler::new();
    for action in c.open() {
        if let FlipAction::ScheduleFocus { target, delay_ms } = action {
            sched.schedule(delay_ms, target);
        }
    }
    assert!(sched.advance_to(599.0).is_empty());
    assert_eq!(sched.advance_to(600.0), vec![FocusTarget::Close]);
}

// =============================================================
// Phone portrait
// =============================================================

#[test]
fn disabled_card_ignores_clicks() {
    let mut c = FlipCard::new(false, FlipTimings::default());
    assert_eq!(c.initial_actions(), vec![FlipAction::ClearHeight]);
    assert!(c.open().is_empty());
    assert!(!c.is_flipped());
}

#[test]
fn disabling_a_flipped_card_unflips_it() {
    let mut c = card();
    c.open();
    let actions = c.set_enabled(false);
    assert_eq!(actions, vec![FlipAction::SetFlipped(false), FlipAction::ClearHeight]);
    assert!(!c.is_flipped());
    assert!(!c.is_enabled());
}

#[test]
fn re_enabling_remeasures() {
    let mut c = FlipCard::new(false, FlipTimings::default());
    assert_eq!(c.set_enabled(true), vec![FlipAction::RecalculateHeight]);
    assert!(c.set_enabled(true).is_empty());
}

// =============================================================
// Resize sources
// =============================================================

#[test]
fn resize_delays_follow_cause() {
    let c = card();
    assert_eq!(c.resize_delay(ResizeCause::Content), Some(100));
    assert_eq!(c.resize_delay(ResizeCause::Window), Some(100));
    assert_eq!(c.resize_delay(ResizeCause::Orientation), Some(300));
}

#[test]
fn resizes_are_ignored_while_disabled() {
    let c = FlipCard::new(false, FlipTimings::default());
    assert_eq!(c.resize_delay(ResizeCause::Window), None);
}
