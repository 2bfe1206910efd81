use super::*;
use seats::SeatKind;

fn id(raw: &str) -> SeatId {
    raw.parse().unwrap()
}

// =============================================================
// click_target
// =============================================================

#[test]
fn click_target_forwards_free_seats() {
    let regular = Seat { id: id("A1"), kind: SeatKind::Regular };
    let vip = Seat { id: id("J1"), kind: SeatKind::Vip };
    assert_eq!(click_target(regular), Some(id("A1")));
    assert_eq!(click_target(vip), Some(id("J1")));
}

#[test]
fn click_target_ignores_blocked_seats() {
    let taken = Seat { id: id("A3"), kind: SeatKind::Taken };
    let aisle = Seat { id: id("A4"), kind: SeatKind::Disabled };
    assert_eq!(click_target(taken), None);
    assert_eq!(click_target(aisle), None);
}

// =============================================================
// Server-side rendering
// =============================================================

#[cfg(feature = "ssr")]
fn render(selected: &[&str], config: LayoutConfig) -> String {
    let selected: Vec<SeatId> = selected.iter().map(|raw| id(raw)).collect();
    let owner = Owner::new();
    owner.with(|| {
        let selected_seats = Signal::derive(move || selected.clone());
        let on_seat_select = Callback::new(|_id: SeatId| {});
        view! { <SeatSelection selected_seats=selected_seats on_seat_select=on_seat_select config=config/> }
            .to_html()
    })
}

/// The full `<button ...>...</button>` element for one seat.
#[cfg(feature = "ssr")]
fn seat_element<'a>(html: &'a str, seat: &str) -> &'a str {
    let marker = format!("data-seat=\"{seat}\"");
    let at = html.find(&marker).unwrap();
    let start = html[..at].rfind("<button").unwrap();
    let end = at + html[at..].find("</button>").unwrap();
    &html[start..end]
}

/// Only the opening `<button ...>` tag for one seat.
#[cfg(feature = "ssr")]
fn seat_tag<'a>(html: &'a str, seat: &str) -> &'a str {
    let element = seat_element(html, seat);
    &element[..=element.find('>').unwrap()]
}

#[cfg(feature = "ssr")]
#[test]
fn renders_data_seat_attribute_with_id() {
    let html = render(&[], LayoutConfig::cinema());
    assert!(html.contains("data-seat=\"A1\""));
    assert!(html.contains("data-seat=\"K14\""));
    assert!(!html.contains("attr:data-seat"));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_every_seat_as_a_button() {
    let html = render(&[], LayoutConfig::cinema());
    assert_eq!(html.matches("<button").count(), 140);
}

#[cfg(feature = "ssr")]
#[test]
fn blocked_seats_are_disabled() {
    let html = render(&[], LayoutConfig::cinema());
    assert!(seat_tag(&html, "A3").contains("disabled"));
    assert!(seat_tag(&html, "A3").contains("seat--taken"));
    assert!(seat_tag(&html, "A4").contains("disabled"));
    assert!(seat_tag(&html, "A4").contains("seat--aisle"));
    assert!(!seat_tag(&html, "A1").contains("disabled"));
    assert!(!seat_tag(&html, "J1").contains("disabled"));
}

#[cfg(feature = "ssr")]
#[test]
fn aisles_have_no_number() {
    let html = render(&[], LayoutConfig::cinema());
    assert!(!seat_element(&html, "A4").contains("seat__number"));
    assert!(!seat_element(&html, "B11").contains("seat__number"));
    assert!(seat_element(&html, "A1").contains("seat__number"));
    assert!(seat_element(&html, "A1").contains(">1<"));
    assert!(seat_element(&html, "A3").contains(">3<"));
}

#[cfg(feature = "ssr")]
#[test]
fn rows_show_their_own_letter_on_both_sides() {
    let html = render(&[], LayoutConfig::cinema());
    for label in ['A', 'H', 'J', 'K'] {
        let cell = format!("seat-map__row-label\">{label}<");
        assert_eq!(html.matches(&cell).count(), 2, "row {label}");
    }
    assert_eq!(html.matches("seat-map__row-label\">I<").count(), 0);
}

#[cfg(feature = "ssr")]
#[test]
fn selection_drives_classes_but_never_marks_blocked_seats() {
    let html = render(&["A1", "A3", "J1"], LayoutConfig::cinema());
    assert!(seat_tag(&html, "A1").contains("seat--selected"));
    assert!(seat_tag(&html, "J1").contains("seat--vip seat--selected"));
    assert!(!seat_tag(&html, "A3").contains("seat--selected"));
    assert!(!seat_tag(&html, "A2").contains("seat--selected"));
}

#[cfg(feature = "ssr")]
#[test]
fn invalid_config_renders_error_line() {
    let config = LayoutConfig { rows: Vec::new(), ..LayoutConfig::cinema() };
    let html = render(&[], config);
    assert!(html.contains("seat-map--error"));
    assert!(html.contains("Seat map unavailable: layout has no rows"));
    assert!(!html.contains("<button"));
}
