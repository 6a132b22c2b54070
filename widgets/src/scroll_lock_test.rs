use super::*;
use crate::memory::{MemoryDom, NodeId};

fn setup() -> (MemoryDom, NodeId) {
    let dom = MemoryDom::new();
    let body = dom.body().unwrap();
    (dom, body)
}

#[test]
fn acquire_hides_overflow_and_records_owner() {
    let (mut dom, body) = setup();
    let lock = ScrollLock::new(body, "drawer");
    lock.acquire(&mut dom);
    assert_eq!(dom.style(body, "overflow"), Some("hidden"));
    assert_eq!(dom.attribute(&body, SCROLL_LOCK_ATTR).as_deref(), Some("drawer"));
    assert!(lock.is_held(&dom));
    assert!(is_locked(&dom, &body));
}

#[test]
fn release_restores_scrolling() {
    let (mut dom, body) = setup();
    let lock = ScrollLock::new(body, "drawer");
    lock.acquire(&mut dom);
    lock.release(&mut dom);
    assert_eq!(dom.style(body, "overflow"), None);
    assert_eq!(dom.attribute(&body, SCROLL_LOCK_ATTR), None);
    assert!(!lock.is_held(&dom));
    assert!(!is_locked(&dom, &body));
}

#[test]
fn acquire_twice_needs_one_release() {
    let (mut dom, body) = setup();
    let lock = ScrollLock::new(body, "drawer");
    lock.acquire(&mut dom);
    lock.acquire(&mut dom);
    assert_eq!(dom.attribute(&body, SCROLL_LOCK_ATTR).as_deref(), Some("drawer"));
    lock.release(&mut dom);
    assert!(!is_locked(&dom, &body));
}

#[test]
fn release_without_acquire_is_harmless() {
    let (mut dom, body) = setup();
    let lock = ScrollLock::new(body, "lightbox");
    lock.release(&mut dom);
    assert!(!is_locked(&dom, &body));
    assert_eq!(dom.style(body, "overflow"), None);
}

#[test]
fn last_owner_to_release_unlocks() {
    let (mut dom, body) = setup();
    let drawer = ScrollLock::new(body, "drawer");
    let lightbox = ScrollLock::new(body, "lightbox");
    drawer.acquire(&mut dom);
    lightbox.acquire(&mut dom);

    drawer.release(&mut dom);
    assert!(is_locked(&dom, &body));
    assert!(lightbox.is_held(&dom));
    assert_eq!(dom.style(body, "overflow"), Some("hidden"));

    lightbox.release(&mut dom);
    assert!(!is_locked(&dom, &body));
    assert_eq!(dom.style(body, "overflow"), None);
}

#[test]
fn owner_is_reported() {
    let (_, body) = setup();
    assert_eq!(ScrollLock::new(body, "lightbox").owner(), "lightbox");
}
