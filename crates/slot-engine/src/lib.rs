//! # slot-engine
//!
//! Time-slot bitmap engine for scheduling availability grids.
//!
//! The day is divided into 48 half-hour slots; a team member's availability
//! is a fixed two-word bitmap over those slots. This crate converts between
//! `HH:MM` texts, slot indices, bitmaps, and contiguous time ranges, and
//! provides the range algebra (run collapsing, merging, bitwise combination,
//! validity) the scheduling UI builds on. Everything is pure and stateless:
//! each operation takes inputs and returns fresh values.
//!
//! ## Modules
//!
//! - [`time`] — validated wall-clock times, strict/lenient parsing, business hours
//! - [`slot`] — slot indexing, time ↔ slot conversion
//! - [`bitmap`] — fixed two-word slot bitmaps: construction, scan, combination
//! - [`ranges`] — collapsing slot runs into ranges, merging, range validity
//! - [`error`] — error types

pub mod bitmap;
pub mod error;
pub mod ranges;
pub mod slot;
pub mod time;

pub use bitmap::{
    active_minutes, active_slots, combine_bitmaps, create_slots_bitmap, CombineOp, SlotBitmap,
    BITMAP_WORDS,
};
pub use error::SlotError;
pub use ranges::{
    free_ranges, merge_time_ranges, range_minutes, require_valid_range, slots_to_time_ranges,
    validate_time_range, TimeRange,
};
pub use slot::{
    slot_index_to_time, time_to_slot_index, time_to_slot_index_lenient, SlotIndex, SLOTS_PER_DAY,
    SLOT_MINUTES,
};
pub use time::{is_business_hours, TimeOfDay};
