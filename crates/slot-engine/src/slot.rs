//! Slot indexing -- the day as 48 half-hour slots.

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// Number of 30-minute slots in a day.
pub const SLOTS_PER_DAY: usize = 48;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Index of one 30-minute slot, always in `0..SLOTS_PER_DAY`.
///
/// Slot `i` spans `[i * 30, (i + 1) * 30)` minutes from midnight. Values can
/// only be built through [`SlotIndex::new`] or the conversion functions, so
/// an off-grid index cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Validate a raw index into the day grid.
    ///
    /// # Errors
    /// Returns `SlotError::SlotOutOfRange` for indices at or beyond 48.
    pub fn new(raw: usize) -> Result<Self> {
        if raw >= SLOTS_PER_DAY {
            return Err(SlotError::SlotOutOfRange(raw));
        }
        Ok(Self(raw as u8))
    }

    /// Constructor for indices already known to be on the grid.
    pub(crate) fn from_grid(raw: usize) -> Self {
        debug_assert!(raw < SLOTS_PER_DAY);
        Self(raw as u8)
    }

    /// The raw index, 0..48.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The start of this slot as zero-padded `HH:MM`.
    pub fn to_time(self) -> String {
        format_grid_position(self.0 as usize)
    }
}

/// Convert an `HH:MM` time (strict policy) to the slot containing it.
///
/// Minutes 0-29 map to the hour's first slot, 30-59 to its second -- floor
/// division, nothing rounds up. Inverse of [`slot_index_to_time`] on the
/// half-hour grid; an off-grid time lands on its containing slot.
pub fn time_to_slot_index(time: &str) -> Result<SlotIndex> {
    slot_of(TimeOfDay::parse(time)?)
}

/// [`time_to_slot_index`] over the lenient parser, for times off the
/// quarter-hour grid.
pub fn time_to_slot_index_lenient(time: &str) -> Result<SlotIndex> {
    slot_of(TimeOfDay::parse_lenient(time)?)
}

fn slot_of(time: TimeOfDay) -> Result<SlotIndex> {
    let raw = time.hour() as usize * 2 + time.minute() as usize / 30;
    // Cannot fail for a validated time; keep the guard on the public path.
    SlotIndex::new(raw)
}

/// Format a slot index as the zero-padded `HH:MM` at which the slot starts.
///
/// # Errors
/// Returns `SlotError::SlotOutOfRange` for indices at or beyond 48.
pub fn slot_index_to_time(index: usize) -> Result<String> {
    Ok(SlotIndex::new(index)?.to_time())
}

/// Zero-padded `HH:MM` for grid positions `0..=48`. Position 48 is the
/// exclusive end-of-day bound `24:00`, used only when closing a range whose
/// run reaches the last slot -- it is not a parseable time of day.
pub(crate) fn format_grid_position(position: usize) -> String {
    debug_assert!(position <= SLOTS_PER_DAY);
    format!("{:02}:{:02}", position / 2, (position % 2) * 30)
}
