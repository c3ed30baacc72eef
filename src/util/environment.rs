//! Capability gate: is a renderable document available?
//!
//! The same toggle code runs during server pre-rendering, where there is no
//! `document` and no cookie store. Callers pass an [`Environment`] into every
//! operation that touches either, and those operations no-op when it reports
//! [`Environment::Prerender`].

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

/// Where the current code is executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// A browser with a live `window.document`.
    Browser,
    /// Server rendering or any host without a document surface.
    Prerender,
}

impl Environment {
    /// Detect the environment at runtime.
    ///
    /// Only a `hydrate` build can ever report [`Environment::Browser`].
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().and_then(|w| w.document()).is_some() {
                return Self::Browser;
            }
            Self::Prerender
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Prerender
        }
    }

    #[must_use]
    pub fn has_document(self) -> bool {
        matches!(self, Self::Browser)
    }
}
