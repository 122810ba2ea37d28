#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn hash_links_map_to_their_selector() {
    assert_eq!(anchor_selector("#about"), Some("#about"));
    assert_eq!(anchor_selector("  #skills "), Some("#skills"));
}

#[test]
fn bare_hash_is_left_alone() {
    assert_eq!(anchor_selector("#"), None);
}

#[test]
fn non_hash_links_are_left_alone() {
    assert_eq!(anchor_selector("/resume.pdf"), None);
    assert_eq!(anchor_selector("https://example.com/#top"), None);
    assert_eq!(anchor_selector(""), None);
}

#[test]
fn scroll_top_subtracts_nav_height() {
    assert_eq!(scroll_top(400.0, 1000.0, 64.0), 1336.0);
}

#[test]
fn scroll_top_handles_targets_above_viewport() {
    assert_eq!(scroll_top(-300.0, 1000.0, 64.0), 636.0);
}

#[test]
fn scroll_top_is_never_negative() {
    assert_eq!(scroll_top(20.0, 0.0, 64.0), 0.0);
}

#[test]
fn missing_nav_means_no_offset() {
    assert_eq!(scroll_top(250.0, 50.0, 0.0), 300.0);
}
