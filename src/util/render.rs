//! Render effect: expose the theme to the stylesheet.
//!
//! The stylesheet keys every color off one attribute on `<html>`, so the whole
//! effect is a single attribute write of `light` or `dark`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::state::theme::Theme;
use crate::util::environment::Environment;

/// Attribute on the root element read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Errors produced by document surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The document has no root element to mark.
    #[error("document has no root element")]
    NoRoot,

    /// The DOM refused the attribute write.
    #[error("attribute write rejected: {0}")]
    Rejected(String),
}

/// Root-element attributes of a document.
pub trait ThemeSurface {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`RenderError`] when the attribute cannot be written.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), RenderError>;
}

/// Write `theme` to `attribute` on the document root.
///
/// Skipped entirely when `env` has no document. Writing the token the
/// attribute already holds is a no-op.
pub fn apply<D: ThemeSurface>(surface: &mut D, env: Environment, attribute: &str, theme: Theme) {
    if !env.has_document() {
        log::debug!("no document; skipping {attribute}={theme}");
        return;
    }
    let token = theme.as_str();
    if surface.attribute(attribute).as_deref() == Some(token) {
        return;
    }
    match surface.set_attribute(attribute, token) {
        Ok(()) => log::debug!("applied {attribute}={token}"),
        Err(e) => log::warn!("could not apply {attribute}={token}: {e}"),
    }
}

/// The `<html>` element of the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl ThemeSurface for BrowserDocument {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn attribute(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?.get_attribute(name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), RenderError> {
        #[cfg(feature = "hydrate")]
        {
            root_element()
                .ok_or(RenderError::NoRoot)?
                .set_attribute(name, value)
                .map_err(|e| RenderError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(RenderError::NoRoot)
        }
    }
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

/// In-memory root element that records attribute writes.
///
/// Clones share the same element.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    root: Rc<RefCell<Root>>,
}

#[derive(Debug, Default)]
struct Root {
    attributes: BTreeMap<String, String>,
    writes: usize,
    detached: bool,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document without a root element; every write fails.
    #[must_use]
    pub fn detached() -> Self {
        let doc = Self::default();
        doc.root.borrow_mut().detached = true;
        doc
    }

    /// Number of attribute writes that reached the element.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.root.borrow().writes
    }

    /// All attributes currently set on the element.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.root
            .borrow()
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl ThemeSurface for MemoryDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), RenderError> {
        let mut root = self.root.borrow_mut();
        if root.detached {
            return Err(RenderError::NoRoot);
        }
        root.attributes.insert(name.to_string(), value.to_string());
        root.writes += 1;
        Ok(())
    }
}
