//! Range algebra over `HH:MM` texts: collapsing slot runs into ranges,
//! merging, validity, and duration.
//!
//! Ranges are compared as text throughout. Zero-padded `HH:MM` sorts
//! identically to numeric time order, and the end-of-day bound `24:00`
//! sorts after every valid time, so the sweep in [`merge_time_ranges`]
//! needs no parsing.

use serde::{Deserialize, Serialize};

use crate::bitmap::{active_slots, SlotBitmap};
use crate::error::{Result, SlotError};
use crate::slot::{format_grid_position, time_to_slot_index, SlotIndex, SLOTS_PER_DAY, SLOT_MINUTES};
use crate::time::TimeOfDay;

/// A contiguous interval of the day, half-open at the end.
///
/// `start` and `end` are zero-padded `HH:MM` texts; `end` may additionally
/// be the exclusive end-of-day bound `24:00` when produced by a slot run
/// that reaches the last slot. Construction performs no validity check --
/// see [`validate_time_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Collapse distinct slot indices into maximal contiguous ranges.
///
/// Input order does not matter and duplicates are harmless. Each maximal run
/// of consecutive indices `[a, b)` becomes one range from slot `a`'s start
/// to slot `b`'s start (`24:00` when the run reaches slot 47). Ranges come
/// back in ascending start order and never overlap.
pub fn slots_to_time_ranges(slots: &[SlotIndex]) -> Vec<TimeRange> {
    let mut active = [false; SLOTS_PER_DAY];
    for slot in slots {
        active[slot.index()] = true;
    }
    collapse_runs(&active, true)
}

/// The gaps: maximal runs of inactive slots as ranges.
///
/// Complement of [`slots_to_time_ranges`] over the same bitmap -- the two
/// results together partition `00:00..24:00`. An all-zero bitmap yields the
/// whole day; a fully active one yields nothing.
pub fn free_ranges(bitmap: &SlotBitmap) -> Vec<TimeRange> {
    let mut active = [false; SLOTS_PER_DAY];
    for slot in active_slots(bitmap) {
        active[slot.index()] = true;
    }
    collapse_runs(&active, false)
}

/// Maximal runs of positions where `active[i] == target`, as half-open
/// ranges. Scans one position past the grid so a run reaching slot 47
/// closes at the end-of-day bound.
fn collapse_runs(active: &[bool; SLOTS_PER_DAY], target: bool) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    for position in 0..=SLOTS_PER_DAY {
        let in_run = position < SLOTS_PER_DAY && active[position] == target;
        match (run_start, in_run) {
            (None, true) => run_start = Some(position),
            (Some(start), false) => {
                ranges.push(TimeRange::new(
                    format_grid_position(start),
                    format_grid_position(position),
                ));
                run_start = None;
            }
            _ => {}
        }
    }

    ranges
}

/// Merge overlapping or touching ranges into a minimal sorted list.
///
/// `next.start <= current.end` merges -- an exact touch collapses too, with
/// the end extended to the larger of the two. Zero or one input comes back
/// unchanged without sorting. Idempotent.
pub fn merge_time_ranges(ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    if ranges.len() <= 1 {
        return ranges;
    }

    let mut sorted = ranges;
    sorted.sort_by(|a, b| a.start.cmp(&b.start));

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if range.start <= last.end {
                if range.end > last.end {
                    last.end = range.end;
                }
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Check range validity: `start` strictly before `end`.
///
/// Both endpoints must parse under the strict policy -- malformed input is
/// an error, not a `false` verdict. With `allow_overnight`, a range that
/// wraps midnight (`start` after `end`) validates only inside a narrow
/// window: start at or after 23:00 and end at or before 00:30. Wraps
/// outside that window are invalid; the window is a deliberate business
/// rule, not a general overnight check.
pub fn validate_time_range(start: &str, end: &str, allow_overnight: bool) -> Result<bool> {
    let start_minutes = TimeOfDay::parse(start)?.minutes_from_midnight();
    let end_minutes = TimeOfDay::parse(end)?.minutes_from_midnight();

    if allow_overnight && start_minutes > end_minutes {
        return Ok(start_minutes >= 23 * 60 && end_minutes <= 30);
    }

    Ok(start_minutes < end_minutes)
}

/// [`validate_time_range`] as a typed failure.
///
/// # Errors
/// Returns `SlotError::InvalidRange` when the verdict is `false`; parse
/// failures pass through unchanged.
pub fn require_valid_range(start: &str, end: &str, allow_overnight: bool) -> Result<()> {
    if validate_time_range(start, end, allow_overnight)? {
        Ok(())
    } else {
        Err(SlotError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

/// Signed width of a range on the slot grid, in minutes.
///
/// `(end slot - start slot) * 30`. Negative when `end` slot-indexes before
/// `start`; nothing validates here -- callers needing a non-negative
/// duration check with [`validate_time_range`] first.
pub fn range_minutes(start: &str, end: &str) -> Result<i32> {
    let start_index = time_to_slot_index(start)?.index() as i32;
    let end_index = time_to_slot_index(end)?.index() as i32;
    Ok((end_index - start_index) * SLOT_MINUTES as i32)
}
