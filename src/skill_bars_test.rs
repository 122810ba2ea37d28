use super::*;
use crate::scheduler::ManualScheduler;

// =============================================================
// Reveal latch
// =============================================================

#[test]
fn section_below_fold_does_not_trigger() {
    let mut latch = RevealLatch::new(42.0);
    assert!(!latch.check(900.0, 800.0));
    assert!(!latch.check(758.0, 800.0));
    assert!(!latch.has_started());
}

#[test]
fn section_inside_margin_triggers() {
    let mut latch = RevealLatch::new(42.0);
    assert!(latch.check(757.0, 800.0));
    assert!(latch.has_started());
}

#[test]
fn reveal_fires_at_most_once() {
    let mut latch = RevealLatch::new(42.0);
    assert!(latch.check(100.0, 800.0));
    for top in [90.0, 50.0, -200.0, 100.0] {
        assert!(!latch.check(top, 800.0));
    }
}

// =============================================================
// Target parsing
// =============================================================

#[test]
fn parse_accepts_plain_and_percent_suffixed_numbers() {
    assert_eq!(parse_target_percent("85"), Some(85));
    assert_eq!(parse_target_percent(" 85% "), Some(85));
    assert_eq!(parse_target_percent("72.6"), Some(73));
}

#[test]
fn parse_clamps_to_one_hundred() {
    assert_eq!(parse_target_percent("140"), Some(100));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse_target_percent(""), None);
    assert_eq!(parse_target_percent("lots"), None);
    assert_eq!(parse_target_percent("-5"), None);
    assert_eq!(parse_target_percent("NaN"), None);
    assert_eq!(parse_target_percent("inf"), None);
}

// =============================================================
// Bar animation
// =============================================================

#[test]
fn bar_counts_up_one_point_per_tick_then_snaps() {
    let mut bar = BarAnimation::new(3);
    assert_eq!(bar.step(), BarStep::Progress(1));
    assert_eq!(bar.step(), BarStep::Progress(2));
    assert_eq!(bar.step(), BarStep::Progress(3));
    assert_eq!(bar.step(), BarStep::Done(3));
    assert_eq!(bar.current(), 3);
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut bar = BarAnimation::new(0);
    assert_eq!(bar.step(), BarStep::Done(0));
}

#[test]
fn bar_target_is_clamped() {
    let bar = BarAnimation::new(250);
    assert_eq!(bar.target(), 100);
}

#[test]
fn bar_progress_is_monotonic_and_bounded() {
    let mut bar = BarAnimation::new(87);
    let mut last = 0;
    let mut ticks = 0;
    loop {
        ticks += 1;
        match bar.step() {
            BarStep::Progress(p) => {
                assert!(p > last);
                assert!(p <= 87);
                last = p;
            }
            BarStep::Done(p) => {
                assert_eq!(p, 87);
                break;
            }
        }
    }
    assert_eq!(ticks, 88);
}

#[test]
fn bar_reaches_target_after_target_ticks_of_virtual_time() {
    let tick_ms = 12;
    let mut sched = ManualScheduler::new();
    let mut bar = BarAnimation::new(50);
    let mut shown = 0;
    sched.schedule(tick_ms, ());
    let mut now = 0.0;
    let finished_at = loop {
        now += f64::from(tick_ms);
        for () in sched.advance_to(now) {
            match bar.step() {
                BarStep::Progress(p) => {
                    shown = p;
                    sched.schedule(tick_ms, ());
                }
                BarStep::Done(p) => shown = p,
            }
        }
        if sched.pending() == 0 {
            break now;
        }
    };
    assert_eq!(shown, 50);
    assert!((finished_at - 612.0).abs() < f64::EPSILON);
}
