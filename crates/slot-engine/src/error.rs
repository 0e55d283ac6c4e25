//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The time text was not two colon-separated integers.
    #[error("Invalid time format: {0:?}")]
    InvalidFormat(String),

    /// Hour or minute outside the permitted domain.
    #[error("Time out of range: {0}")]
    OutOfRange(String),

    /// Slot index outside the day grid.
    #[error("Slot index out of range: {0}")]
    SlotOutOfRange(usize),

    /// Start does not precede end.
    #[error("Invalid time range: {start}-{end}")]
    InvalidRange { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, SlotError>;
