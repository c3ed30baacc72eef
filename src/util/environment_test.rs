use super::*;

#[test]
fn browser_has_document() {
    assert!(Environment::Browser.has_document());
}

#[test]
fn prerender_has_no_document() {
    assert!(!Environment::Prerender.has_document());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_is_prerender_without_hydrate() {
    assert_eq!(Environment::current(), Environment::Prerender);
}
