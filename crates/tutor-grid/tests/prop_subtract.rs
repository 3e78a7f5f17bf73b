//! Property-based tests for booking subtraction using proptest.
//!
//! These check invariants that must hold for *any* availability and booking
//! lists, not just the hand-picked cases in `interval_tests.rs`.

use proptest::prelude::*;
use tutor_grid::interval::{subtract, Interval};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A valid interval inside the day, 5 to 240 minutes long.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i32..1400, 5i32..=240).prop_map(|(start, len)| Interval::new(start, (start + len).min(1440)))
}

fn arb_intervals(max: usize) -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..=max)
}

/// Minute `m` is covered by at least one interval.
fn covers(intervals: &[Interval], m: i32) -> bool {
    intervals.iter().any(|i| i.start <= m && m < i.end)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn subtracting_nothing_is_identity(available in arb_intervals(6)) {
        prop_assert_eq!(subtract(&available, &[]), available);
    }

    #[test]
    fn result_intervals_are_valid(available in arb_intervals(6), busy in arb_intervals(6)) {
        for free in subtract(&available, &busy) {
            prop_assert!(free.is_valid(), "non-positive remnant {:?}", free);
        }
    }

    #[test]
    fn result_never_overlaps_a_booking(available in arb_intervals(6), busy in arb_intervals(6)) {
        let free = subtract(&available, &busy);
        for f in &free {
            for b in &busy {
                prop_assert!(!f.overlaps(b), "{:?} overlaps booking {:?}", f, b);
            }
        }
    }

    #[test]
    fn result_is_inside_availability(available in arb_intervals(6), busy in arb_intervals(6)) {
        let free = subtract(&available, &busy);
        for m in 0..1440 {
            if covers(&free, m) {
                prop_assert!(covers(&available, m), "minute {} is free but was never declared", m);
            }
        }
    }

    #[test]
    fn declared_unbooked_minutes_stay_free(available in arb_intervals(6), busy in arb_intervals(6)) {
        let free = subtract(&available, &busy);
        for m in 0..1440 {
            if covers(&available, m) && !covers(&busy, m) {
                prop_assert!(covers(&free, m), "minute {} was lost", m);
            }
        }
    }

    #[test]
    fn booking_order_does_not_change_coverage(available in arb_intervals(6), busy in arb_intervals(6)) {
        let forward = subtract(&available, &busy);
        let reversed: Vec<Interval> = busy.iter().rev().copied().collect();
        let backward = subtract(&available, &reversed);
        for m in 0..1440 {
            prop_assert_eq!(covers(&forward, m), covers(&backward, m), "minute {} differs", m);
        }
    }
}
