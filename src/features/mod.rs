//! Feature implementations for focuswave.

pub mod focus;
