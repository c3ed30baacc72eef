//! Reusable view components.

pub mod theme_toggle;
