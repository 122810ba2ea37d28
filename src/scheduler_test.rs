#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_scheduler_is_empty_at_time_zero() {
    let sched = ManualScheduler::<u8>::new();
    assert_eq!(sched.now_ms(), 0.0);
    assert_eq!(sched.pending(), 0);
    assert!(sched.next_due().is_none());
}

#[test]
fn items_fire_only_once_due() {
    let mut sched = ManualScheduler::new();
    sched.schedule(100, "a");
    assert!(sched.advance_to(99.0).is_empty());
    assert_eq!(sched.advance_to(100.0), vec!["a"]);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn drained_items_are_ordered_by_due_time_then_insertion() {
    let mut sched = ManualScheduler::new();
    sched.schedule(30, "late");
    sched.schedule(10, "first");
    sched.schedule(10, "second");
    assert_eq!(sched.next_due(), Some(10.0));
    assert_eq!(sched.advance_to(50.0), vec!["first", "second", "late"]);
}

#[test]
fn delays_are_relative_to_current_virtual_time() {
    let mut sched = ManualScheduler::new();
    sched.advance_to(1000.0);
    sched.schedule(320, 1);
    assert_eq!(sched.next_due(), Some(1320.0));
    assert!(sched.advance_to(1319.0).is_empty());
    assert_eq!(sched.advance_to(1320.0), vec![1]);
}

#[test]
fn clock_never_moves_backwards() {
    let mut sched = ManualScheduler::<u8>::new();
    sched.advance_to(500.0);
    sched.advance_to(200.0);
    assert_eq!(sched.now_ms(), 500.0);
}
