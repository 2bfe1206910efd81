//! Ordered set of selected seat ids.
//!
//! The selection is owned by whoever embeds the seat map, never by the map
//! itself. Insertion order is kept so summaries list seats in the order the
//! user picked them.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::seat::SeatId;

/// Seats currently chosen by the user, in pick order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    seats: Vec<SeatId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatId> {
        self.seats.iter()
    }

    #[must_use]
    pub fn ids(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    /// Add `id` if absent, remove it if present. Returns `true` when the seat
    /// ends up selected.
    ///
    /// No availability check happens here; see
    /// [`crate::SeatLayout::toggle_selection`].
    pub fn toggle(&mut self, id: SeatId) -> bool {
        if let Some(pos) = self.seats.iter().position(|s| *s == id) {
            self.seats.remove(pos);
            false
        } else {
            self.seats.push(id);
            true
        }
    }
}

impl FromIterator<SeatId> for Selection {
    fn from_iter<I: IntoIterator<Item = SeatId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            if !selection.contains(&id) {
                selection.seats.push(id);
            }
        }
        selection
    }
}
