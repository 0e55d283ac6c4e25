//! WASM bindings for slot-engine.
//!
//! Exposes time ↔ slot conversion, bitmap construction, and range algebra to
//! the scheduling UI via `wasm-bindgen`. Complex values cross the boundary as
//! JSON strings: bitmaps as two-element word arrays `[w0, w1]`, slot lists as
//! index arrays, ranges as `{start, end}` objects with `HH:MM` texts.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/engine/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::bitmap::{self, CombineOp, SlotBitmap, BITMAP_WORDS};
use slot_engine::ranges::{self, TimeRange};
use slot_engine::slot::SlotIndex;
use slot_engine::SlotError;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON parsing and error mapping
// ---------------------------------------------------------------------------

fn to_js(err: SlotError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse a JSON `[w0, w1]` word array into a bitmap. Bits beyond slot 47 are
/// masked off on entry, so a sloppy caller cannot smuggle phantom slots in.
fn parse_bitmap_json(json: &str) -> Result<SlotBitmap, JsValue> {
    let words: [u32; BITMAP_WORDS] = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bitmap JSON: {}", e)))?;
    Ok(SlotBitmap::from_words(words))
}

/// Parse a JSON array of raw slot indices, validating each onto the grid.
fn parse_slots_json(json: &str) -> Result<Vec<SlotIndex>, JsValue> {
    let raw: Vec<usize> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid slot list JSON: {}", e)))?;
    raw.into_iter()
        .map(|index| SlotIndex::new(index).map_err(to_js))
        .collect()
}

/// Parse a JSON array of `{start, end}` range objects.
fn parse_ranges_json(json: &str) -> Result<Vec<TimeRange>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ranges JSON: {}", e)))
}

fn parse_op(op: &str) -> Result<CombineOp, JsValue> {
    match op.to_ascii_uppercase().as_str() {
        "AND" => Ok(CombineOp::And),
        "OR" => Ok(CombineOp::Or),
        other => Err(JsValue::from_str(&format!("Unknown combine op: {}", other))),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Convert an `HH:MM` time (strict quarter-hour policy) to its slot index.
#[wasm_bindgen(js_name = "timeToSlotIndex")]
pub fn time_to_slot_index(time: &str) -> Result<u32, JsValue> {
    slot_engine::time_to_slot_index(time)
        .map(|slot| slot.index() as u32)
        .map_err(to_js)
}

/// Convert an `HH:MM` time with any minute value to its slot index.
#[wasm_bindgen(js_name = "timeToSlotIndexLenient")]
pub fn time_to_slot_index_lenient(time: &str) -> Result<u32, JsValue> {
    slot_engine::time_to_slot_index_lenient(time)
        .map(|slot| slot.index() as u32)
        .map_err(to_js)
}

/// Format a slot index as the zero-padded `HH:MM` at which the slot starts.
#[wasm_bindgen(js_name = "slotIndexToTime")]
pub fn slot_index_to_time(index: u32) -> Result<String, JsValue> {
    slot_engine::slot_index_to_time(index as usize).map_err(to_js)
}

/// Build a bitmap marking every slot in `[start, end)`.
///
/// Returns a JSON `[w0, w1]` word array. An empty or inverted range yields
/// the all-zero bitmap; use [`validateTimeRange`](validate_time_range) first
/// when the caller wants that to be an error.
#[wasm_bindgen(js_name = "createSlotsBitmap")]
pub fn create_slots_bitmap(start: &str, end: &str) -> Result<String, JsValue> {
    let bitmap = bitmap::create_slots_bitmap(start, end).map_err(to_js)?;
    to_json(&bitmap.words())
}

/// All active slot indices of a bitmap, ascending, as a JSON array.
#[wasm_bindgen(js_name = "activeSlots")]
pub fn active_slots(bitmap_json: &str) -> Result<String, JsValue> {
    let bitmap = parse_bitmap_json(bitmap_json)?;
    let indices: Vec<u32> = bitmap::active_slots(&bitmap)
        .iter()
        .map(|slot| slot.index() as u32)
        .collect();
    to_json(&indices)
}

/// Collapse a JSON array of slot indices into contiguous `{start, end}`
/// ranges, returned as a JSON array in ascending start order.
#[wasm_bindgen(js_name = "slotsToTimeRanges")]
pub fn slots_to_time_ranges(slots_json: &str) -> Result<String, JsValue> {
    let slots = parse_slots_json(slots_json)?;
    to_json(&ranges::slots_to_time_ranges(&slots))
}

/// Merge overlapping or touching `{start, end}` ranges into a minimal
/// sorted JSON array.
#[wasm_bindgen(js_name = "mergeTimeRanges")]
pub fn merge_time_ranges(ranges_json: &str) -> Result<String, JsValue> {
    let input = parse_ranges_json(ranges_json)?;
    to_json(&ranges::merge_time_ranges(input))
}

/// Fold a JSON array of `[w0, w1]` bitmaps with `"AND"` or `"OR"`
/// (case-insensitive). An empty array yields the all-zero bitmap.
#[wasm_bindgen(js_name = "combineBitmaps")]
pub fn combine_bitmaps(bitmaps_json: &str, op: &str) -> Result<String, JsValue> {
    let word_arrays: Vec<[u32; BITMAP_WORDS]> = serde_json::from_str(bitmaps_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bitmap list JSON: {}", e)))?;
    let bitmaps: Vec<SlotBitmap> = word_arrays.into_iter().map(SlotBitmap::from_words).collect();
    let combined = bitmap::combine_bitmaps(&bitmaps, parse_op(op)?);
    to_json(&combined.words())
}

/// The gaps of a bitmap: maximal runs of inactive slots as `{start, end}`
/// ranges, returned as a JSON array.
#[wasm_bindgen(js_name = "freeRanges")]
pub fn free_ranges(bitmap_json: &str) -> Result<String, JsValue> {
    let bitmap = parse_bitmap_json(bitmap_json)?;
    to_json(&ranges::free_ranges(&bitmap))
}

/// Total active time of a bitmap in minutes.
#[wasm_bindgen(js_name = "activeMinutes")]
pub fn active_minutes(bitmap_json: &str) -> Result<u32, JsValue> {
    Ok(bitmap::active_minutes(&parse_bitmap_json(bitmap_json)?))
}

/// Whether a display time falls inside business hours (08:00 to 16:59).
#[wasm_bindgen(js_name = "isBusinessHours")]
pub fn is_business_hours(time: &str) -> Result<bool, JsValue> {
    slot_engine::is_business_hours(time).map_err(to_js)
}

/// Check that `start` is strictly before `end`; with `allow_overnight`, a
/// midnight wrap validates only from 23:00 or later into 00:30 or earlier.
#[wasm_bindgen(js_name = "validateTimeRange")]
pub fn validate_time_range(
    start: &str,
    end: &str,
    allow_overnight: bool,
) -> Result<bool, JsValue> {
    ranges::validate_time_range(start, end, allow_overnight).map_err(to_js)
}

/// Signed width of a range on the slot grid, in minutes. Negative when the
/// end slot precedes the start slot.
#[wasm_bindgen(js_name = "rangeMinutes")]
pub fn range_minutes(start: &str, end: &str) -> Result<i32, JsValue> {
    ranges::range_minutes(start, end).map_err(to_js)
}
