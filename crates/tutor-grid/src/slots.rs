//! Quantize a display window into fixed-width slots.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::time::Minutes;

/// Default display window start (08:00).
pub const DEFAULT_WINDOW_START: Minutes = 8 * 60;
/// Default display window end (20:00).
pub const DEFAULT_WINDOW_END: Minutes = 20 * 60;
/// Default slot width in minutes.
pub const DEFAULT_SLOT_MINUTES: Minutes = 30;

/// A decoded display window: the minute range shown per day and the slot width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: Minutes,
    pub end: Minutes,
    pub slot_minutes: Minutes,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl SlotWindow {
    pub fn slots(&self) -> Vec<Interval> {
        build_slots(self.start, self.end, self.slot_minutes)
    }
}

/// Build contiguous slots of exactly `slot_minutes`, starting at
/// `window_start`.
///
/// Only whole slots that end at or before `window_end` are emitted; a
/// trailing fragment shorter than `slot_minutes` is dropped. A non-positive
/// width yields no slots, and so does a width that overflows `i32` when
/// added to the cursor.
pub fn build_slots(window_start: Minutes, window_end: Minutes, slot_minutes: Minutes) -> Vec<Interval> {
    if slot_minutes <= 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut m = window_start;
    while let Some(next) = m.checked_add(slot_minutes) {
        if next > window_end {
            break;
        }
        slots.push(Interval::new(m, next));
        m = next;
    }
    slots
}
