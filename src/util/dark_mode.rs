//! Dark mode initialization and toggle.
//!
//! Seeds the in-memory preference from the dark mode cookie and applies the
//! `data-theme` attribute to the `<html>` element. Toggle flips the preference,
//! writes the cookie, and re-applies the attribute in the same call.
//!
//! TRADE-OFFS
//! ==========
//! Cookie and DOM access are browser-only. Under [`Environment::Prerender`]
//! initialization is skipped and toggling only flips the in-memory flag, which
//! keeps server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::HostConfig;
use crate::state::theme::{Theme, ThemeState};
use crate::util::cookie::{BrowserCookies, CookieSource, PersistedPreference};
use crate::util::environment::Environment;
use crate::util::render::{self, BrowserDocument, ThemeSurface};

/// The toggle wired to the real page.
pub type BrowserDarkMode = DarkMode<BrowserCookies, BrowserDocument>;

/// Preference store, cookie persistence and render effect for one session.
#[derive(Clone, Debug)]
pub struct DarkMode<C, D> {
    state: ThemeState,
    persisted: PersistedPreference<C>,
    surface: D,
    attribute: String,
}

impl BrowserDarkMode {
    /// Toggle bound to `document.cookie` and the page's `<html>` element.
    #[must_use]
    pub fn browser(config: &HostConfig) -> Self {
        Self::from_config(config, BrowserCookies, BrowserDocument)
    }
}

impl<C: CookieSource, D: ThemeSurface> DarkMode<C, D> {
    /// Toggle with the default host configuration.
    #[must_use]
    pub fn new(cookies: C, surface: D) -> Self {
        Self::from_config(&HostConfig::default(), cookies, surface)
    }

    /// Toggle over `config`. The preference starts light; the configured
    /// fallback only applies once [`DarkMode::initialize`] finds no cookie.
    #[must_use]
    pub fn from_config(config: &HostConfig, cookies: C, surface: D) -> Self {
        Self {
            state: ThemeState::default(),
            persisted: PersistedPreference::with_settings(
                cookies,
                config.cookie_name.clone(),
                config.cookie_max_age(),
                config.fallback.is_dark(),
            ),
            surface,
            attribute: config.theme_attribute.clone(),
        }
    }

    /// Seed the preference from the cookie and render it.
    ///
    /// No-op without a document. Calling it again re-reads the cookie, as a
    /// page reload would.
    pub fn initialize(&mut self, env: Environment) {
        if !env.has_document() {
            log::debug!("dark mode: no document, initialization skipped");
            return;
        }
        let stored = self.persisted.get();
        self.state.seed(stored);
        log::debug!("dark mode: initialized to {}", self.state.theme());
        render::apply(&mut self.surface, env, &self.attribute, self.state.theme());
    }

    /// Flip the preference, persist it, and re-render. Returns the new value.
    pub fn toggle(&mut self, env: Environment) -> bool {
        let next = self.state.flip();
        if env.has_document() {
            self.persisted.set(next);
        }
        log::debug!("dark mode: toggled to {}", self.state.theme());
        render::apply(&mut self.surface, env, &self.attribute, self.state.theme());
        next
    }

    /// Current preference.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Read-only view of the preference store.
    #[must_use]
    pub fn state(&self) -> &ThemeState {
        &self.state
    }
}
