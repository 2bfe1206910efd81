//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render state they are handed and report user intent through
//! callbacks. They do not own booking state.

pub mod seat_legend;
pub mod seat_selection;
