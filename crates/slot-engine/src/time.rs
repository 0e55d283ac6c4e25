//! Validated wall-clock times and the business-hours predicate.
//!
//! Two parsing policies exist side by side, picked explicitly by name:
//! [`TimeOfDay::parse`] is the strict default (minutes restricted to the
//! quarter-hour grid), [`TimeOfDay::parse_lenient`] accepts any minute.
//! Neither ever clamps or silently repairs input.

use std::fmt;

use crate::error::{Result, SlotError};

/// Minutes permitted by the strict parser.
const QUARTER_MINUTES: [u8; 4] = [0, 15, 30, 45];

/// First business hour, inclusive.
pub const BUSINESS_START_HOUR: u8 = 8;
/// End of business hours, exclusive -- 17:00 itself is already outside.
pub const BUSINESS_END_HOUR: u8 = 17;

/// A wall-clock time within a single day.
///
/// Values can only be built through [`parse`](TimeOfDay::parse) or
/// [`parse_lenient`](TimeOfDay::parse_lenient), so `hour * 60 + minute` is
/// always in `0..=1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Parse `HH:MM` with minutes restricted to {0, 15, 30, 45}.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidFormat` if the text is not two
    /// colon-separated integers, `SlotError::OutOfRange` if the hour is not
    /// in 0..=23 or the minute is off the quarter-hour grid.
    pub fn parse(text: &str) -> Result<Self> {
        let time = Self::parse_lenient(text)?;
        if !QUARTER_MINUTES.contains(&time.minute) {
            return Err(SlotError::OutOfRange(format!(
                "minute {} not on the quarter-hour grid",
                time.minute
            )));
        }
        Ok(time)
    }

    /// Parse `HH:MM` accepting any minute in 0..=59.
    ///
    /// The alternate entry point for display times that fall off the
    /// quarter-hour grid, e.g. `16:59`. Still validates: an unparsable text
    /// or an out-of-day component is an error, never a clamped value.
    pub fn parse_lenient(text: &str) -> Result<Self> {
        let (hour_text, minute_text) = text
            .split_once(':')
            .ok_or_else(|| SlotError::InvalidFormat(text.to_string()))?;

        let hour: i32 = hour_text
            .parse()
            .map_err(|_| SlotError::InvalidFormat(text.to_string()))?;
        let minute: i32 = minute_text
            .parse()
            .map_err(|_| SlotError::InvalidFormat(text.to_string()))?;

        if !(0..24).contains(&hour) {
            return Err(SlotError::OutOfRange(format!("hour {} not in 0..=23", hour)));
        }
        if !(0..60).contains(&minute) {
            return Err(SlotError::OutOfRange(format!(
                "minute {} not in 0..=59",
                minute
            )));
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Hour component, 0..=23.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component, 0..=59.
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, 0..=1439.
    pub fn minutes_from_midnight(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Whether a time falls inside business hours: 08:00 inclusive to 17:00
/// exclusive, so `16:59` is inside and `17:00` is not.
///
/// Uses the lenient parser -- the inputs are arbitrary display times, not
/// grid-aligned ones. This is a filter on output times only; it never stands
/// in for range validation.
pub fn is_business_hours(time: &str) -> Result<bool> {
    let time = TimeOfDay::parse_lenient(time)?;
    Ok((BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&time.hour()))
}
