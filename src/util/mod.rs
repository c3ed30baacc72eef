//! Browser-facing helpers behind the dark mode toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cookie and DOM access live here, each behind a small trait with a browser
//! backend and an in-memory one, so the toggle logic runs unchanged in tests
//! and during server rendering.

pub mod cookie;
pub mod dark_mode;
pub mod environment;
pub mod render;
