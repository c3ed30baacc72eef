//! Cookie-backed persistence for the dark mode preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference survives reloads in a single first-party cookie so the
//! server could read it too. Backends mirror `document.cookie`: reads return
//! the whole `a=1; b=2` string and writes take one `Set-Cookie` line. The
//! browser (or [`MemoryCookies`]) owns expiry.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never reach callers. When a write is rejected the adapter
//! keeps the value for the rest of the session and serves reads from memory.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

/// Cookie holding the dark mode flag.
pub const DARK_MODE_COOKIE: &str = "greek-alphabet-dark-mode";

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Errors produced by cookie backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No document to hold cookies (server rendering, workers).
    #[error("cookie storage unavailable")]
    Unavailable,

    /// The user agent has cookies turned off.
    #[error("cookies are disabled")]
    Disabled,

    /// The backend refused the read or write.
    #[error("cookie storage rejected the operation: {0}")]
    Rejected(String),
}

/// A `document.cookie`-shaped store.
pub trait CookieSource {
    /// Every live cookie as a `name=value; name2=value2` string.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when cookies cannot be read.
    fn read(&self) -> Result<String, StorageError>;

    /// Store one cookie written in `Set-Cookie` syntax.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the cookie cannot be stored.
    fn write(&mut self, set_cookie: &str) -> Result<(), StorageError>;
}

/// Durable boolean preference stored in a cookie.
#[derive(Clone, Debug)]
pub struct PersistedPreference<C> {
    source: C,
    key: String,
    max_age: Duration,
    default: bool,
    /// Value kept in memory after a rejected write.
    session_value: Option<bool>,
}

impl<C: CookieSource> PersistedPreference<C> {
    /// Adapter over `source` with the standard key, a one-year lifetime and a
    /// `false` default.
    pub fn new(source: C) -> Self {
        Self::with_settings(source, DARK_MODE_COOKIE, Duration::seconds(COOKIE_MAX_AGE_SECS), false)
    }

    pub fn with_settings(source: C, key: impl Into<String>, max_age: Duration, default: bool) -> Self {
        Self { source, key: key.into(), max_age, default, session_value: None }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last written value, or the default when nothing usable is stored.
    pub fn get(&self) -> bool {
        if let Some(value) = self.session_value {
            return value;
        }
        let raw = match self.source.read() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("dark mode cookie unreadable, using default: {e}");
                return self.default;
            }
        };
        let Some(value) = lookup(&raw, &self.key) else {
            return self.default;
        };
        match serde_json::from_str::<bool>(&value) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("dark mode cookie holds {value:?}, using default: {e}");
                self.default
            }
        }
    }

    /// Overwrite the stored value and restart its retention window.
    pub fn set(&mut self, value: bool) {
        let header = self.set_cookie_line(value);
        match self.source.write(&header) {
            Ok(()) => self.session_value = None,
            Err(e) => {
                log::warn!("dark mode cookie not saved, keeping it for this session: {e}");
                self.session_value = Some(value);
            }
        }
    }

    /// `Set-Cookie` syntax for `value`.
    #[must_use]
    pub fn set_cookie_line(&self, value: bool) -> String {
        Cookie::build((self.key.clone(), value.to_string()))
            .path("/")
            .max_age(self.max_age)
            .same_site(SameSite::Lax)
            .build()
            .to_string()
    }
}

fn lookup(raw: &str, key: &str) -> Option<String> {
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == key)
        .map(|c| c.value().to_string())
}

// =============================================================================
// Browser backend
// =============================================================================

/// `document.cookie` of the current page.
///
/// Holds no JS handles, so it can live inside a reactive signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn read(&self) -> Result<String, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?.cookie().map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn write(&mut self, set_cookie: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(set_cookie)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, StorageError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StorageError::Unavailable)?
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| StorageError::Unavailable)
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory cookie jar with a manual clock.
///
/// Clones share one jar, the way every page load of a site shares the
/// browser's cookie store. The clock starts at the Unix epoch and only moves
/// through [`MemoryCookies::advance`].
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    jar: Rc<RefCell<Jar>>,
}

#[derive(Debug)]
struct Jar {
    entries: BTreeMap<String, Entry>,
    now: OffsetDateTime,
    disabled: bool,
    writes: usize,
}

impl Default for Jar {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), now: OffsetDateTime::UNIX_EPOCH, disabled: false, writes: 0 }
    }
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Option<OffsetDateTime>,
}

impl Jar {
    fn is_live(&self, entry: &Entry) -> bool {
        entry.expires_at.is_none_or(|at| self.now < at)
    }
}

impl MemoryCookies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A jar that refuses every read and write.
    #[must_use]
    pub fn disabled() -> Self {
        let cookies = Self::default();
        cookies.jar.borrow_mut().disabled = true;
        cookies
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut jar = self.jar.borrow_mut();
        jar.now += by;
    }

    /// Unexpired value of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        let jar = self.jar.borrow();
        jar.entries
            .get(name)
            .filter(|entry| jar.is_live(entry))
            .map(|entry| entry.value.clone())
    }

    /// Number of accepted writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.jar.borrow().writes
    }
}

impl CookieSource for MemoryCookies {
    fn read(&self) -> Result<String, StorageError> {
        let jar = self.jar.borrow();
        if jar.disabled {
            return Err(StorageError::Disabled);
        }
        let pairs: Vec<String> = jar
            .entries
            .iter()
            .filter(|(_, entry)| jar.is_live(entry))
            .map(|(name, entry)| format!("{name}={}", entry.value))
            .collect();
        Ok(pairs.join("; "))
    }

    fn write(&mut self, set_cookie: &str) -> Result<(), StorageError> {
        let mut jar = self.jar.borrow_mut();
        if jar.disabled {
            return Err(StorageError::Disabled);
        }
        let cookie = Cookie::parse(set_cookie).map_err(|e| StorageError::Rejected(e.to_string()))?;
        let name = cookie.name().to_string();
        match cookie.max_age() {
            Some(age) if age <= Duration::ZERO => {
                jar.entries.remove(&name);
            }
            max_age => {
                // A lifetime past the end of the calendar never expires.
                let expires_at = max_age.and_then(|age| jar.now.checked_add(age));
                jar.entries.insert(name, Entry { value: cookie.value().to_string(), expires_at });
            }
        }
        jar.writes += 1;
        Ok(())
    }
}
