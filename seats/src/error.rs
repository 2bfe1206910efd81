//! Error types for seat parsing, layout generation and selection.

use crate::seat::SeatId;

/// Error returned when a seat identifier string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatIdError {
    /// The input was empty or whitespace only.
    #[error("seat id is empty")]
    Empty,
    /// The first character is not an ASCII uppercase letter.
    #[error("invalid seat row '{0}': expected an uppercase letter")]
    InvalidRow(char),
    /// The row letter is not followed by a column number.
    #[error("seat id '{0}' has no column number")]
    MissingNumber(String),
    /// The column part is not a positive integer.
    #[error("invalid seat number in '{0}'")]
    InvalidNumber(String),
}

/// Error returned by [`crate::generate_layout`] for an inconsistent venue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    NoRows,
    #[error("layout has zero seats per row")]
    NoSeats,
    #[error("row label '{0}' is not an uppercase letter")]
    InvalidRowLabel(char),
    #[error("row '{0}' appears more than once")]
    DuplicateRow(char),
    /// An aisle column lies outside `1..=seats_per_row`.
    #[error("aisle column {column} is outside 1..={seats_per_row}")]
    AisleOutOfRange { column: u16, seats_per_row: u16 },
    #[error("vip row '{0}' is not part of the layout")]
    UnknownVipRow(char),
    /// A taken seat does not exist in the generated grid.
    #[error("taken seat {0} is outside the layout")]
    TakenOutOfRange(SeatId),
    /// A venue description could not be parsed.
    #[error("invalid layout json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Error returned when a seat cannot be toggled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("seat {0} does not exist")]
    UnknownSeat(SeatId),
    /// The seat is taken or an aisle gap.
    #[error("seat {0} is not available")]
    Blocked(SeatId),
}
