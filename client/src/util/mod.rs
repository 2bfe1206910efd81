//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure mapping code lives here so it can be unit tested without a browser
//! or a reactive runtime.

pub mod seat_classes;
