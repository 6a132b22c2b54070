use super::*;
use crate::memory::MemoryDom;

#[test]
fn dismiss_fades_once() {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let loader = dom.append(body, "div", &[("id", "loader")]);
    let mut preloader = Preloader::new(loader);

    assert_eq!(preloader.state(), PreloaderState::Visible);
    assert!(preloader.dismiss(&mut dom));
    assert_eq!(dom.style(loader, "opacity"), Some("0"));
    assert_eq!(preloader.state(), PreloaderState::Fading);
    assert!(!preloader.dismiss(&mut dom));
}

#[test]
fn remove_only_after_dismiss() {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let loader = dom.append(body, "div", &[]);
    let mut preloader = Preloader::new(loader);

    assert!(!preloader.remove(&mut dom));
    assert!(dom.is_connected(&loader));

    preloader.dismiss(&mut dom);
    assert!(preloader.remove(&mut dom));
    assert!(!dom.is_connected(&loader));
    assert_eq!(preloader.state(), PreloaderState::Removed);
    assert!(!preloader.remove(&mut dom));
    assert!(!preloader.dismiss(&mut dom));
}
