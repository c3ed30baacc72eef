//! Session-scoped application state.

pub mod theme;
