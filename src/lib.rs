//! # greek-alphabet
//!
//! Leptos + WASM frontend shell for the Greek alphabet reference page.
//!
//! The only stateful behavior is the light/dark theme toggle: a boolean
//! preference kept in a one-year cookie and rendered as a `data-theme`
//! attribute on `<html>`. See [`util::dark_mode`].
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | In-memory theme preference |
//! | [`util`] | Cookie persistence, render effect, capability gate, toggle |
//! | [`config`] | Host configuration read at startup |
//! | [`components`] | Toggle button |
//! | [`app`] | Root component and SSR shell |

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
