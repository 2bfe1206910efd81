//! Key explaining the seat colors.

use leptos::prelude::*;

use crate::util::seat_classes::{LEGEND, legend_swatch_class};

/// Legend row shown under the seat map.
#[component]
pub fn SeatLegend() -> impl IntoView {
    let entries = LEGEND
        .iter()
        .map(|&(label, kind, selected)| {
            view! {
                <div class="seat-legend__item">
                    <span class=legend_swatch_class(kind, selected)></span>
                    <span class="seat-legend__label">{label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="seat-legend">{entries}</div> }
}
