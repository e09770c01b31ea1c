/// Slots, logic levels and the fixed lamp colour of every slot
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of slots on the board. Fixed, never generalised.
pub const SLOT_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot index {0} is out of range (expected 0..=3)")]
    OutOfRange(u8),
}

/// One of the four fixed positions, each bound to one lamp and one button
/// at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(0), Slot(1), Slot(2), Slot(3)];

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn color(self) -> LampColor {
        match self.0 {
            0 => LampColor::Yellow,
            1 => LampColor::Blue,
            2 => LampColor::Green,
            _ => LampColor::Red,
        }
    }

    /// Host-side frame label for this slot's lamp, e.g. `BLUE_frame`.
    pub fn frame_name(self) -> &'static str {
        match self.color() {
            LampColor::Yellow => "YELLOW_frame",
            LampColor::Blue => "BLUE_frame",
            LampColor::Green => "GREEN_frame",
            LampColor::Red => "RED_frame",
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot(0)
    }
}

impl TryFrom<u8> for Slot {
    type Error = SlotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < SLOT_COUNT {
            Ok(Slot(value))
        } else {
            Err(SlotError::OutOfRange(value))
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digital logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampColor {
    Yellow,
    Blue,
    Green,
    Red,
}
