//! Seat-map widget: screen marker, seat grid and legend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout is generated once when the component is created and never
//! changes afterwards. Selection is owned by the caller: the widget reads
//! `selected_seats` to pick classes and reports clicks on free seats through
//! `on_seat_select`. It never mutates selection itself.

#[cfg(test)]
#[path = "seat_selection_test.rs"]
mod seat_selection_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use seats::{LayoutConfig, Seat, SeatId, SeatRow, generate_layout};

use crate::components::seat_legend::SeatLegend;
use crate::util::seat_classes::{seat_class, seat_disabled, seat_title};

/// Interactive seat grid.
///
/// `config` defaults to the cinema venue. An invalid venue renders an error
/// line in place of the grid.
#[component]
pub fn SeatSelection(
    #[prop(into)] selected_seats: Signal<Vec<SeatId>>,
    on_seat_select: Callback<SeatId>,
    #[prop(optional)] config: Option<LayoutConfig>,
) -> impl IntoView {
    let layout = match generate_layout(&config.unwrap_or_default()) {
        Ok(layout) => layout,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("seat layout rejected: {e}");
            return view! {
                <div class="seat-map seat-map--error">{format!("Seat map unavailable: {e}")}</div>
            }
            .into_any();
        }
    };

    let rows = layout
        .rows()
        .iter()
        .map(|row| seat_row(row, selected_seats, on_seat_select))
        .collect::<Vec<_>>();

    view! {
        <div class="seat-map">
            <div class="seat-map__screen">
                <div class="seat-map__screen-arc"></div>
                <div class="seat-map__screen-label">"SCREEN"</div>
            </div>

            <div class="seat-map__rows">{rows}</div>

            <SeatLegend/>
        </div>
    }
    .into_any()
}

fn seat_row(row: &SeatRow, selected_seats: Signal<Vec<SeatId>>, on_seat_select: Callback<SeatId>) -> impl IntoView {
    let label = row.label.to_string();
    let seats = row
        .seats
        .iter()
        .map(|&seat| seat_button(seat, selected_seats, on_seat_select))
        .collect::<Vec<_>>();

    view! {
        <div class="seat-map__row">
            <div class="seat-map__row-label">{label.clone()}</div>
            <div class="seat-map__seats">{seats}</div>
            <div class="seat-map__row-label">{label}</div>
        </div>
    }
}

fn seat_button(seat: Seat, selected_seats: Signal<Vec<SeatId>>, on_seat_select: Callback<SeatId>) -> impl IntoView {
    let disabled = seat_disabled(seat.kind);
    let is_selected = move || selected_seats.with(|ids| ids.contains(&seat.id));
    let class = move || seat_class(seat.kind, is_selected());

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        if let Some(id) = click_target(seat) {
            on_seat_select.run(id);
        }
    };

    view! {
        <button
            class=class
            disabled=disabled
            title=seat_title(&seat)
            data-seat=seat.id.to_string()
            on:click=on_click
        >
            {seat.label().map(|number| view! { <span class="seat__number">{number}</span> })}
        </button>
    }
}

/// Id reported to the owner when `seat` is clicked; blocked seats report nothing.
fn click_target(seat: Seat) -> Option<SeatId> {
    (!seat_disabled(seat.kind)).then_some(seat.id)
}
