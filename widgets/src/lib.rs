//! Page-enhancement widgets for static portfolio sites.
//!
//! This crate owns the behavior of every interactive affordance on the page:
//! the off-canvas navigation drawer with its focus trap, the image lightbox,
//! the persisted light/dark theme, the scroll-driven nav bar, reveal-on-scroll
//! and the preloader. It is written against the [`dom::Dom`] trait and has no
//! browser dependency; the `folio` host crate implements that trait over
//! `web-sys` and forwards DOM events into [`page::Page`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Mounts all widgets over a document and dispatches events |
//! | [`drawer`] | Navigation drawer state machine |
//! | [`lightbox`] | Modal image viewer |
//! | [`focus`] | Focusability rules and Tab containment |
//! | [`scroll_lock`] | Page scroll lock shared by drawer and lightbox |
//! | [`menu`] | Drawer/footer menus cloned from the nav list |
//! | [`theme`] | Theme toggle and the preference store trait |
//! | [`scroll`] | Nav bar shrink/hide, back-to-top, anchors, skip link |
//! | [`observe`] | Reveal-on-scroll and active section links |
//! | [`preloader`] | Loading screen dismissal |
//! | [`events`] | Subscription and event types shared with the host |
//! | [`input`] | Keyboard input types |
//! | [`config`] | Site configuration with defaults |
//! | [`dom`] | The document trait |
//! | `memory` | In-memory document for tests and headless hosts (`memory` feature) |
//! | [`consts`] | Class names, attribute names, default distances |

pub mod config;
pub mod consts;
pub mod dom;
pub mod drawer;
pub mod events;
pub mod focus;
pub mod input;
pub mod lightbox;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod menu;
pub mod observe;
pub mod page;
pub mod preloader;
pub mod scroll;
pub mod scroll_lock;
pub mod theme;
