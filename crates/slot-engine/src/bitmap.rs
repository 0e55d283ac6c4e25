//! Fixed-size slot bitmaps: construction, scanning, bitwise combination.

use crate::error::Result;
use crate::slot::{time_to_slot_index, SlotIndex, SLOTS_PER_DAY, SLOT_MINUTES};

/// Number of 32-bit words in a slot bitmap.
pub const BITMAP_WORDS: usize = 2;

const WORD_BITS: usize = 32;

/// A day's 48 slots as a fixed two-word bitset.
///
/// Bit `b` of word `w` marks slot `w * 32 + b`; a set bit means the slot is
/// active. Bits at positions 48..64 are never set: [`SlotBitmap::from_words`]
/// masks them off, so the invariant holds for every reachable value, and the
/// fixed width makes mismatched-length combination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotBitmap {
    words: [u32; BITMAP_WORDS],
}

impl SlotBitmap {
    /// The bitmap with no active slots.
    pub const fn empty() -> Self {
        Self {
            words: [0; BITMAP_WORDS],
        }
    }

    /// Build from raw words, clearing any bits beyond slot 47.
    pub fn from_words(mut words: [u32; BITMAP_WORDS]) -> Self {
        for (w, word) in words.iter_mut().enumerate() {
            *word &= word_mask(w);
        }
        Self { words }
    }

    /// The raw word pair.
    pub fn words(&self) -> [u32; BITMAP_WORDS] {
        self.words
    }

    /// Whether the given slot is active.
    pub fn contains(&self, slot: SlotIndex) -> bool {
        let index = slot.index();
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Number of active slots.
    pub fn count_active(&self) -> u32 {
        self.words.iter().map(|word| word.count_ones()).sum()
    }

    fn set(&mut self, index: usize) {
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }
}

/// Bits of word `w` that correspond to real slots.
fn word_mask(word: usize) -> u32 {
    let live = SLOTS_PER_DAY.saturating_sub(word * WORD_BITS).min(WORD_BITS);
    if live == WORD_BITS {
        u32::MAX
    } else {
        (1u32 << live) - 1
    }
}

/// Build a bitmap marking every slot in `[start, end)`.
///
/// End-exclusive: the slot containing `end` itself stays clear. When `end`
/// does not slot-index after `start` the result is the empty bitmap rather
/// than an error; callers that want a typed failure check with
/// [`require_valid_range`](crate::ranges::require_valid_range) first.
///
/// # Errors
/// Returns a parse error when either endpoint is not a valid strict `HH:MM`.
pub fn create_slots_bitmap(start: &str, end: &str) -> Result<SlotBitmap> {
    let start_index = time_to_slot_index(start)?.index();
    let end_index = time_to_slot_index(end)?.index();

    let mut bitmap = SlotBitmap::empty();
    for index in start_index..end_index {
        bitmap.set(index);
    }
    Ok(bitmap)
}

/// All active slots in ascending order.
///
/// Scans words low to high, bits low to high, and stops at slot 48 so a
/// stray tail bit can never surface as a phantom slot.
pub fn active_slots(bitmap: &SlotBitmap) -> Vec<SlotIndex> {
    let mut slots = Vec::new();
    for (w, word) in bitmap.words().iter().enumerate() {
        for bit in 0..WORD_BITS {
            let index = w * WORD_BITS + bit;
            if index >= SLOTS_PER_DAY {
                break;
            }
            if word & (1 << bit) != 0 {
                slots.push(SlotIndex::from_grid(index));
            }
        }
    }
    slots
}

/// Bitwise operator for [`combine_bitmaps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOp {
    /// Intersection: a slot stays active only when active in every bitmap.
    And,
    /// Union: a slot becomes active when active in any bitmap.
    Or,
}

/// Fold a list of bitmaps into one with the given operator.
///
/// Starts from a copy of the first bitmap and folds left to right; the
/// inputs are never mutated. An empty list yields the empty bitmap.
pub fn combine_bitmaps(bitmaps: &[SlotBitmap], op: CombineOp) -> SlotBitmap {
    let Some((first, rest)) = bitmaps.split_first() else {
        return SlotBitmap::empty();
    };

    let mut acc = *first;
    for bitmap in rest {
        for (acc_word, word) in acc.words.iter_mut().zip(bitmap.words) {
            match op {
                CombineOp::And => *acc_word &= word,
                CombineOp::Or => *acc_word |= word,
            }
        }
    }
    acc
}

/// Total active time in minutes: number of active slots times 30.
pub fn active_minutes(bitmap: &SlotBitmap) -> u32 {
    bitmap.count_active() * SLOT_MINUTES
}
