//! Seat-map domain model shared by the `client` UI and the host server.
//!
//! This crate owns seat identity, seat kinds, the venue layout description,
//! deterministic grid generation and the selection set. It has no UI or IO
//! so every rule can be exercised with plain unit tests.

pub mod error;
pub mod layout;
pub mod seat;
pub mod selection;

pub use error::{LayoutError, SeatIdError, SelectionError};
pub use layout::{LayoutConfig, SeatLayout, SeatRow, generate_layout};
pub use seat::{Seat, SeatId, SeatKind};
pub use selection::Selection;
