//! Booking-page state: the venue being shown and the user's picks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<BookingState>` by the root component. The seat-map
//! widget never writes here directly; clicks come back through the page's
//! callback and land in [`BookingState::toggle_seat`].

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use seats::{LayoutConfig, LayoutError, SeatId, SeatLayout, Selection, SelectionError, generate_layout};

/// Selection state for the booking page.
#[derive(Clone, Debug)]
pub struct BookingState {
    /// Venue handed to the seat-map widget. Only set by `new`, together with `layout`.
    venue: LayoutConfig,
    /// Grid used to validate toggles; an error when the venue is invalid.
    layout: Result<SeatLayout, LayoutError>,
    /// Seats currently picked, in pick order.
    pub selection: Selection,
}

impl BookingState {
    pub fn new(venue: LayoutConfig) -> Self {
        let layout = generate_layout(&venue);
        Self { venue, layout, selection: Selection::new() }
    }

    /// Venue the grid was generated from.
    pub fn venue(&self) -> &LayoutConfig {
        &self.venue
    }

    /// Toggle a seat if the venue allows it.
    ///
    /// Returns `true` when the seat is selected after the call.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] for taken, aisle or unknown seats and leaves
    /// the selection unchanged. An invalid venue has no seats at all, so every
    /// id is reported as unknown.
    pub fn toggle_seat(&mut self, id: SeatId) -> Result<bool, SelectionError> {
        match &self.layout {
            Ok(layout) => layout.toggle_selection(&mut self.selection, id),
            Err(_) => Err(SelectionError::UnknownSeat(id)),
        }
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Selected ids in pick order, as passed to the seat-map widget.
    pub fn selected_ids(&self) -> Vec<SeatId> {
        self.selection.ids().to_vec()
    }

    /// One-line description of the current picks, e.g. `"2 seats: A1, B2"`.
    pub fn summary(&self) -> String {
        let count = self.selection.len();
        if count == 0 {
            return "No seats selected".to_owned();
        }
        let noun = if count == 1 { "seat" } else { "seats" };
        let ids = self.selection.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        format!("{count} {noun}: {ids}")
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new(LayoutConfig::cinema())
    }
}
