#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn get_is_empty_outside_the_browser() {
    assert_eq!(LocalStorage.get("theme"), None);
}

#[test]
fn set_is_a_noop_outside_the_browser() {
    let mut store = LocalStorage;
    store.set("theme", "dark");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn usable_as_boxed_store() {
    let mut store: Box<dyn PreferenceStore> = Box::new(LocalStorage);
    store.set("theme", "light");
    assert!(store.get("theme").is_none());
}
