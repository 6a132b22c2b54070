//! Browser boot: mount the page and wire it to real events.
//!
//! The page lives in an `Rc<RefCell<_>>` shared by every listener. Listeners,
//! observers and timers live as long as the document, so their closures are
//! leaked with `forget()`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use widgets::events::{Event, EventKind, Outcome, Source, Subscription, Target};
use widgets::observe::{ObserveKind, Observation};
use widgets::page::Page;

use crate::error::BootError;
use crate::util::config::{self, CONFIG_SCRIPT_ID};
use crate::util::dom::WebDom;
use crate::util::keys;
use crate::util::storage::LocalStorage;

type SharedPage = Rc<RefCell<Page<WebDom>>>;

/// Mount every widget found in the document and install its listeners.
pub fn boot() -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;
    if document.body().is_none() {
        return Err(BootError::NoBody);
    }

    let raw = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    let config = config::resolve(raw.as_deref());

    let page = Page::mount(WebDom::new(window.clone(), document), Box::new(LocalStorage), config);
    let subscriptions = page.subscriptions();
    let observations = page.observations();
    let has_preloader = page.preloader().is_some();
    let page: SharedPage = Rc::new(RefCell::new(page));

    let listeners = subscriptions.len();
    for sub in subscriptions {
        listen(&window, &page, sub);
    }
    observe(&page, observations);
    if has_preloader {
        schedule_fallback(&page);
    }

    log::info!("page enhanced: {listeners} listeners");
    Ok(())
}

// =============================================================================
// Listeners
// =============================================================================

fn listen(window: &Window, page: &SharedPage, sub: Subscription<Element>) {
    let target: EventTarget = match sub.source {
        Source::Element(el) => el.into(),
        Source::Document => match window.document() {
            Some(doc) => doc.into(),
            None => return,
        },
        Source::Window => window.clone().into(),
    };
    let kind = sub.kind;
    let route = sub.target;
    let page = Rc::clone(page);
    let win = window.clone();

    let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(payload) = payload(&win, kind, &ev) else {
            return;
        };
        let outcome = dispatch(&page, route, &payload);
        if outcome.prevents_default() {
            ev.prevent_default();
        }
        if route == Target::PageLoad && outcome.is_handled() {
            schedule_removal(&page);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) = target.add_event_listener_with_callback(kind.dom_name(), cb.as_ref().unchecked_ref()) {
        log::warn!("addEventListener({}) failed: {err:?}", kind.dom_name());
        return;
    }
    cb.forget();
}

fn payload(window: &Window, kind: EventKind, ev: &web_sys::Event) -> Option<Event<Element>> {
    match kind {
        EventKind::Click => {
            let origin = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
            Some(Event::Click { origin })
        }
        EventKind::KeyDown => {
            let key_ev = ev.dyn_ref::<web_sys::KeyboardEvent>()?;
            keys::from_event(key_ev).map(Event::Key)
        }
        EventKind::Scroll => Some(Event::Scroll { y: window.scroll_y().unwrap_or(0.0) }),
        EventKind::Load => Some(Event::Load),
    }
}

fn dispatch(page: &SharedPage, target: Target, event: &Event<Element>) -> Outcome {
    let Ok(mut page) = page.try_borrow_mut() else {
        log::warn!("re-entrant {target:?} event dropped");
        return Outcome::Ignored;
    };
    page.handle(target, event)
}

// =============================================================================
// Observers
// =============================================================================

fn observe(page: &SharedPage, observations: Vec<Observation<Element>>) {
    for kind in [ObserveKind::Reveal, ObserveKind::Section] {
        let batch: Vec<_> = observations.iter().filter(|o| o.kind == kind).collect();
        let Some(threshold) = batch.first().map(|o| o.threshold) else {
            continue;
        };
        match observer(page, kind, threshold) {
            Some(obs) => {
                for o in &batch {
                    obs.observe(&o.node);
                }
            }
            // Without an observer, revealed content must not stay hidden.
            None if kind == ObserveKind::Reveal => {
                if let Ok(mut page) = page.try_borrow_mut() {
                    page.reveal_all();
                }
            }
            None => {}
        }
    }
}

fn observer(page: &SharedPage, kind: ObserveKind, threshold: f64) -> Option<IntersectionObserver> {
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, obs: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let node = entry.target();
            let Ok(mut page) = page.try_borrow_mut() else {
                log::warn!("re-entrant {kind:?} intersection dropped");
                continue;
            };
            if page.on_intersect(kind, &node) {
                obs.unobserve(&node);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(obs) => {
            cb.forget();
            Some(obs)
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable for {kind:?}: {err:?}");
            None
        }
    }
}

// =============================================================================
// Preloader timers
// =============================================================================

/// Dismiss the preloader even if `load` never fires.
fn schedule_fallback(page: &SharedPage) {
    let Ok(fallback_ms) = page.try_borrow().map(|p| p.config().preloader.fallback_ms) else {
        return;
    };
    let page = Rc::clone(page);
    Timeout::new(fallback_ms, move || {
        let dismissed = page.try_borrow_mut().is_ok_and(|mut p| p.dismiss_preloader());
        if dismissed {
            schedule_removal(&page);
        }
    })
    .forget();
}

/// Detach the preloader once its fade has run.
fn schedule_removal(page: &SharedPage) {
    let Ok(fade_ms) = page.try_borrow().map(|p| p.config().preloader.fade_ms) else {
        return;
    };
    let page = Rc::clone(page);
    Timeout::new(fade_ms, move || {
        if let Ok(mut p) = page.try_borrow_mut() {
            p.remove_preloader();
        }
    })
    .forget();
}
