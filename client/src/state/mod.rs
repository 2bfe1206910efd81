//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Seat selection belongs to the page, not to the seat-map widget. The page
//! reads it from context and hands the widget a read-only view plus a
//! callback.

pub mod booking;
