//! Tests for time ↔ slot-index conversion.

use slot_engine::error::SlotError;
use slot_engine::slot::{
    slot_index_to_time, time_to_slot_index, time_to_slot_index_lenient, SlotIndex, SLOTS_PER_DAY,
};

#[test]
fn half_hour_times_map_to_expected_slots() {
    // Slot i spans [i*30, (i+1)*30) minutes from midnight.
    assert_eq!(time_to_slot_index("00:00").unwrap().index(), 0);
    assert_eq!(time_to_slot_index("00:30").unwrap().index(), 1);
    assert_eq!(time_to_slot_index("09:00").unwrap().index(), 18);
    assert_eq!(time_to_slot_index("09:30").unwrap().index(), 19);
    assert_eq!(time_to_slot_index("23:30").unwrap().index(), 47);
}

#[test]
fn quarter_hour_times_floor_to_containing_slot() {
    // Minutes 0-29 land in the hour's first slot, 30-59 in its second.
    assert_eq!(time_to_slot_index("09:15").unwrap().index(), 18);
    assert_eq!(time_to_slot_index("09:45").unwrap().index(), 19);
}

#[test]
fn lenient_conversion_floors_arbitrary_minutes() {
    assert_eq!(time_to_slot_index_lenient("09:29").unwrap().index(), 18);
    assert_eq!(time_to_slot_index_lenient("09:59").unwrap().index(), 19);
}

#[test]
fn slot_index_formats_slot_start() {
    assert_eq!(slot_index_to_time(0).unwrap(), "00:00");
    assert_eq!(slot_index_to_time(1).unwrap(), "00:30");
    assert_eq!(slot_index_to_time(18).unwrap(), "09:00");
    assert_eq!(slot_index_to_time(47).unwrap(), "23:30");
}

#[test]
fn slot_index_rejects_off_grid_values() {
    assert!(matches!(
        slot_index_to_time(48).unwrap_err(),
        SlotError::SlotOutOfRange(48)
    ));
    assert!(SlotIndex::new(SLOTS_PER_DAY).is_err());
    assert!(SlotIndex::new(usize::MAX).is_err());
}

#[test]
fn conversion_round_trips_on_the_half_hour_grid() {
    for index in 0..SLOTS_PER_DAY {
        let time = slot_index_to_time(index).unwrap();
        assert_eq!(time_to_slot_index(&time).unwrap().index(), index);
    }
}

#[test]
fn off_grid_times_round_trip_to_slot_start() {
    let slot = time_to_slot_index("09:15").unwrap();
    assert_eq!(slot.to_time(), "09:00");
}

#[test]
fn conversion_rejects_malformed_text() {
    assert!(matches!(
        time_to_slot_index("oops").unwrap_err(),
        SlotError::InvalidFormat(_)
    ));
}
