//! Venue description and deterministic seat-grid generation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI builds a [`SeatLayout`] once per widget instance and then only
//! performs lookups on it. Generation is a pure function of [`LayoutConfig`],
//! so the server-rendered grid and the hydrated grid always agree.
//!
//! Kind precedence per seat is aisle, then taken, then VIP row, then regular.
//! A taken seat that falls on an aisle column is therefore an aisle.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, SelectionError};
use crate::seat::{Seat, SeatId, SeatKind};
use crate::selection::Selection;

const CINEMA_ROWS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K'];
const CINEMA_SEATS_PER_ROW: u16 = 14;
const CINEMA_TAKEN: [(char, u16); 20] = [
    ('A', 3),
    ('A', 12),
    ('B', 5),
    ('B', 9),
    ('C', 2),
    ('C', 13),
    ('D', 7),
    ('D', 10),
    ('E', 1),
    ('E', 14),
    ('F', 3),
    ('F', 8),
    ('G', 5),
    ('G', 12),
    ('H', 2),
    ('H', 9),
    ('J', 6),
    ('J', 13),
    ('K', 4),
    ('K', 10),
];
const CINEMA_VIP_ROWS: [char; 2] = ['J', 'K'];
const CINEMA_AISLES: [u16; 2] = [4, 11];

/// Fixed parameters describing a venue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Row letters, front to back.
    pub rows: Vec<char>,
    pub seats_per_row: u16,
    /// Seats already booked.
    #[serde(default)]
    pub taken: BTreeSet<SeatId>,
    #[serde(default)]
    pub vip_rows: BTreeSet<char>,
    /// 1-based columns left empty as aisle gaps in every row.
    #[serde(default)]
    pub aisles: BTreeSet<u16>,
}

impl LayoutConfig {
    /// The single-screen cinema used by the booking page: rows A-K without
    /// `I`, 14 seats each, aisles at columns 4 and 11, VIP back rows.
    #[must_use]
    pub fn cinema() -> Self {
        Self {
            rows: CINEMA_ROWS.to_vec(),
            seats_per_row: CINEMA_SEATS_PER_ROW,
            taken: CINEMA_TAKEN.iter().map(|&(row, n)| SeatId::new(row, n)).collect(),
            vip_rows: CINEMA_VIP_ROWS.into_iter().collect(),
            aisles: CINEMA_AISLES.into_iter().collect(),
        }
    }

    /// Parse a venue description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] if the document is malformed. The result
    /// is not validated until it is passed to [`generate_layout`].
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(raw)?)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.rows.is_empty() {
            return Err(LayoutError::NoRows);
        }
        if self.seats_per_row == 0 {
            return Err(LayoutError::NoSeats);
        }
        let mut seen = HashSet::with_capacity(self.rows.len());
        for &row in &self.rows {
            if !row.is_ascii_uppercase() {
                return Err(LayoutError::InvalidRowLabel(row));
            }
            if !seen.insert(row) {
                return Err(LayoutError::DuplicateRow(row));
            }
        }
        if let Some(&column) = self.aisles.iter().find(|&&c| c == 0 || c > self.seats_per_row) {
            return Err(LayoutError::AisleOutOfRange { column, seats_per_row: self.seats_per_row });
        }
        if let Some(&row) = self.vip_rows.iter().find(|&&row| !seen.contains(&row)) {
            return Err(LayoutError::UnknownVipRow(row));
        }
        if let Some(&id) = self
            .taken
            .iter()
            .find(|id| !seen.contains(&id.row()) || id.number() > self.seats_per_row)
        {
            return Err(LayoutError::TakenOutOfRange(id));
        }
        Ok(())
    }

    fn kind_of(&self, id: SeatId) -> SeatKind {
        if self.aisles.contains(&id.number()) {
            SeatKind::Disabled
        } else if self.taken.contains(&id) {
            SeatKind::Taken
        } else if self.vip_rows.contains(&id.row()) {
            SeatKind::Vip
        } else {
            SeatKind::Regular
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::cinema()
    }
}

/// One row of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    pub label: char,
    pub seats: Vec<Seat>,
}

/// Generated seat grid, front row first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    rows: Vec<SeatRow>,
    seats_per_row: u16,
}

/// Build the seat grid for a venue.
///
/// # Errors
///
/// Returns a [`LayoutError`] if the config has no rows or seats, repeats or
/// mislabels a row, or names aisles, VIP rows or taken seats outside the grid.
pub fn generate_layout(config: &LayoutConfig) -> Result<SeatLayout, LayoutError> {
    config.validate()?;

    let rows = config
        .rows
        .iter()
        .map(|&label| SeatRow {
            label,
            seats: (1..=config.seats_per_row)
                .map(|number| {
                    let id = SeatId::new(label, number);
                    Seat { id, kind: config.kind_of(id) }
                })
                .collect(),
        })
        .collect();

    Ok(SeatLayout { rows, seats_per_row: config.seats_per_row })
}

impl SeatLayout {
    #[must_use]
    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    #[must_use]
    pub fn seats_per_row(&self) -> u16 {
        self.seats_per_row
    }

    /// All seats in row-major order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|row| row.seats.iter())
    }

    /// Look up a seat by id.
    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        let row = self.rows.iter().find(|row| row.label == id.row())?;
        let index = usize::from(id.number()).checked_sub(1)?;
        row.seats.get(index)
    }

    /// Whether the seat exists and is neither taken nor an aisle.
    #[must_use]
    pub fn is_selectable(&self, id: &SeatId) -> bool {
        self.seat(id).is_some_and(|seat| !seat.is_blocked())
    }

    #[must_use]
    pub fn count(&self, kind: SeatKind) -> usize {
        self.seats().filter(|seat| seat.kind == kind).count()
    }

    /// Number of seats a user could pick (regular plus VIP).
    #[must_use]
    pub fn available(&self) -> usize {
        self.seats().filter(|seat| !seat.is_blocked()).count()
    }

    /// Toggle `id` in `selection` if the seat can be picked.
    ///
    /// Returns `true` when the seat is selected after the call.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownSeat`] for ids outside the grid and
    /// [`SelectionError::Blocked`] for taken or aisle seats. The selection is
    /// left untouched in both cases.
    pub fn toggle_selection(&self, selection: &mut Selection, id: SeatId) -> Result<bool, SelectionError> {
        let seat = self.seat(&id).ok_or(SelectionError::UnknownSeat(id))?;
        if seat.is_blocked() {
            return Err(SelectionError::Blocked(id));
        }
        Ok(selection.toggle(id))
    }
}
