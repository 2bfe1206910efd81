//! Seat identity and seat kinds.
//!
//! DESIGN
//! ======
//! A seat is addressed by its row letter plus a 1-based column number and
//! renders as `"A3"`. The string form is the only representation that crosses
//! the UI boundary, so `Display` and `FromStr` must stay exact inverses.

#[cfg(test)]
#[path = "seat_test.rs"]
mod seat_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SeatIdError;

/// Category of a single seat. Every seat has exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// Ordinary free seat.
    #[default]
    Regular,
    /// Free seat in a premium row.
    Vip,
    /// Already booked; cannot be selected.
    Taken,
    /// Aisle gap; rendered invisible and never selectable.
    Disabled,
}

impl SeatKind {
    /// Whether the seat can never be selected.
    #[must_use]
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Taken | Self::Disabled)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Vip => "vip",
            Self::Taken => "taken",
            Self::Disabled => "disabled",
        }
    }
}

/// Row letter plus 1-based column number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: char,
    number: u16,
}

impl SeatId {
    /// Build an id without validation. Callers constructing ids from user
    /// input should go through [`SeatId::from_str`] instead.
    #[must_use]
    pub const fn new(row: char, number: u16) -> Self {
        Self { row, number }
    }

    #[must_use]
    pub const fn row(self) -> char {
        self.row
    }

    #[must_use]
    pub const fn number(self) -> u16 {
        self.number
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let row = chars.next().ok_or(SeatIdError::Empty)?;
        if !row.is_ascii_uppercase() {
            return Err(SeatIdError::InvalidRow(row));
        }
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(SeatIdError::MissingNumber(trimmed.to_owned()));
        }
        // `u16::from_str` accepts a leading '+', which is not part of the format.
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatIdError::InvalidNumber(trimmed.to_owned()));
        }
        let number = rest
            .parse::<u16>()
            .map_err(|_| SeatIdError::InvalidNumber(trimmed.to_owned()))?;
        if number == 0 {
            return Err(SeatIdError::InvalidNumber(trimmed.to_owned()));
        }
        Ok(Self { row, number })
    }
}

impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One addressable unit in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub kind: SeatKind,
}

impl Seat {
    /// Text shown on the seat button: the column number, or nothing for aisles.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if self.kind == SeatKind::Disabled {
            None
        } else {
            Some(self.id.number.to_string())
        }
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.kind.is_blocked()
    }
}
