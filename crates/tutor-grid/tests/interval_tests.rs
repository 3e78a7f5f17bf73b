//! Tests for booking subtraction and the slot overlap rule.

use tutor_grid::interval::{any_overlap, subtract, Interval};

fn iv(start: i32, end: i32) -> Interval {
    Interval::new(start, end)
}

// ── Subtraction ─────────────────────────────────────────────────────────────

#[test]
fn empty_busy_list_is_identity() {
    let available = vec![iv(480, 720), iv(780, 1020), iv(600, 660)];
    assert_eq!(subtract(&available, &[]), available);
}

#[test]
fn inner_booking_splits_into_two_remnants() {
    assert_eq!(subtract(&[iv(0, 60)], &[iv(20, 40)]), vec![iv(0, 20), iv(40, 60)]);
}

#[test]
fn covering_booking_removes_interval_entirely() {
    assert!(subtract(&[iv(0, 60)], &[iv(-10, 70)]).is_empty());
}

#[test]
fn exact_cover_removes_interval() {
    assert!(subtract(&[iv(480, 540)], &[iv(480, 540)]).is_empty());
}

#[test]
fn non_overlapping_intervals_pass_through() {
    let available = vec![iv(480, 540), iv(600, 660)];
    // Booking sits exactly between the two and touches neither's interior.
    assert_eq!(subtract(&available, &[iv(540, 600)]), available);
}

#[test]
fn booking_aligned_to_start_leaves_only_tail() {
    assert_eq!(subtract(&[iv(480, 720)], &[iv(480, 540)]), vec![iv(540, 720)]);
}

#[test]
fn booking_aligned_to_end_leaves_only_head() {
    assert_eq!(subtract(&[iv(480, 720)], &[iv(660, 720)]), vec![iv(480, 660)]);
}

#[test]
fn sequential_bookings_refine_previous_result() {
    // 08:00-12:00 minus 09:00-10:00 minus 11:00-11:30
    let free = subtract(&[iv(480, 720)], &[iv(540, 600), iv(660, 690)]);
    assert_eq!(free, vec![iv(480, 540), iv(600, 660), iv(690, 720)]);
}

#[test]
fn overlapping_bookings_are_harmless() {
    let free = subtract(&[iv(480, 720)], &[iv(540, 620), iv(600, 660)]);
    assert_eq!(free, vec![iv(480, 540), iv(660, 720)]);
}

#[test]
fn overlapping_availability_is_tolerated() {
    // Both declared ranges lose the booked hour; the result is not merged.
    let free = subtract(&[iv(480, 720), iv(600, 780)], &[iv(630, 690)]);
    assert_eq!(free, vec![iv(480, 630), iv(690, 720), iv(600, 630), iv(690, 780)]);
}

#[test]
fn booking_spanning_two_intervals_trims_both() {
    let free = subtract(&[iv(480, 600), iv(660, 780)], &[iv(570, 690)]);
    assert_eq!(free, vec![iv(480, 570), iv(690, 780)]);
}

#[test]
fn zero_length_booking_removes_nothing() {
    let free = subtract(&[iv(480, 600)], &[iv(540, 540)]);
    assert_eq!(free, vec![iv(480, 540), iv(540, 600)]);
}

// ── Overlap rule ────────────────────────────────────────────────────────────

#[test]
fn touching_endpoints_do_not_overlap() {
    let slot = iv(480, 510);
    assert!(!slot.overlaps(&iv(510, 540)));
    assert!(!iv(510, 540).overlaps(&slot));
    assert!(!slot.overlaps(&iv(450, 480)));
}

#[test]
fn partial_cover_overlaps() {
    let slot = iv(480, 510);
    assert!(slot.overlaps(&iv(500, 540)));
    assert!(slot.overlaps(&iv(420, 481)));
    assert!(slot.overlaps(&iv(490, 495)));
}

#[test]
fn any_overlap_over_list() {
    let intervals = vec![iv(420, 480), iv(540, 600)];
    assert!(!any_overlap(&intervals, &iv(480, 510)));
    assert!(any_overlap(&intervals, &iv(510, 570)));
    assert!(!any_overlap(&[], &iv(480, 510)));
}
