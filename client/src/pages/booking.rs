//! Booking page: owns seat selection and hosts the seat map.

use leptos::prelude::*;
use seats::{SeatId, SelectionError};

use crate::components::seat_selection::SeatSelection;
use crate::state::booking::BookingState;

#[component]
pub fn BookingPage() -> impl IntoView {
    let booking = expect_context::<RwSignal<BookingState>>();

    let venue = booking.with_untracked(|b| b.venue().clone());
    let selected = Signal::derive(move || booking.with(BookingState::selected_ids));
    let summary = move || booking.with(BookingState::summary);
    let nothing_selected = move || booking.with(|b| b.selection.is_empty());

    let on_seat_select = Callback::new(move |id: SeatId| {
        booking.update(|b| report_toggle(id, b.toggle_seat(id)));
    });
    let on_clear = move |_ev: leptos::ev::MouseEvent| booking.update(BookingState::clear);

    view! {
        <main class="booking-page">
            <h1 class="booking-page__title">"Select Seats"</h1>

            <SeatSelection selected_seats=selected on_seat_select=on_seat_select config=venue/>

            <div class="booking-page__summary">
                <span class="booking-page__picked">{summary}</span>
                <button class="booking-page__clear" disabled=nothing_selected on:click=on_clear>
                    "Clear"
                </button>
            </div>
        </main>
    }
}

fn report_toggle(id: SeatId, outcome: Result<bool, SelectionError>) {
    #[cfg(feature = "hydrate")]
    match outcome {
        Ok(true) => log::debug!("seat {id} selected"),
        Ok(false) => log::debug!("seat {id} released"),
        Err(e) => log::warn!("seat {id} not toggled: {e}"),
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, outcome);
    }
}
