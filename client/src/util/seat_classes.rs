//! Seat state to CSS class mapping.
//!
//! The widget derives every visual from `(SeatKind, selected)`. A blocked
//! seat never renders as selected, even if the owner's selection set still
//! lists it.

#[cfg(test)]
#[path = "seat_classes_test.rs"]
mod seat_classes_test;

use seats::{Seat, SeatKind};

/// Legend swatches: label plus the seat state whose classes they reuse.
pub const LEGEND: &[(&str, SeatKind, bool)] = &[
    ("Available", SeatKind::Regular, false),
    ("Selected", SeatKind::Regular, true),
    ("Taken", SeatKind::Taken, false),
    ("VIP", SeatKind::Vip, false),
];

/// Class list for a seat button.
pub fn seat_class(kind: SeatKind, selected: bool) -> String {
    let selected = selected && !kind.is_blocked();
    let mut classes = vec!["seat"];
    match kind {
        SeatKind::Disabled => classes.push("seat--aisle"),
        SeatKind::Taken => classes.push("seat--taken"),
        // VIP keeps its accent border when selected.
        SeatKind::Vip => classes.push("seat--vip"),
        SeatKind::Regular if !selected => classes.push("seat--regular"),
        SeatKind::Regular => {}
    }
    if selected {
        classes.push("seat--selected");
    }
    classes.join(" ")
}

/// Whether the seat button is rendered disabled.
pub fn seat_disabled(kind: SeatKind) -> bool {
    kind.is_blocked()
}

/// Hover text for a seat button. Aisles have none.
pub fn seat_title(seat: &Seat) -> Option<String> {
    let row = seat.id.row();
    let number = seat.id.number();
    match seat.kind {
        SeatKind::Disabled => None,
        SeatKind::Taken => Some(format!("Row {row}, seat {number} (taken)")),
        SeatKind::Vip => Some(format!("Row {row}, seat {number} (VIP)")),
        SeatKind::Regular => Some(format!("Row {row}, seat {number}")),
    }
}

/// Class list for a legend swatch.
pub fn legend_swatch_class(kind: SeatKind, selected: bool) -> String {
    format!("{} seat-legend__swatch", seat_class(kind, selected))
}
