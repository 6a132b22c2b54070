//! Browser host for the `widgets` page-enhancement engine.
//!
//! Built as a `cdylib` with the `hydrate` feature, this crate starts on
//! module load, wraps the live document in `util::dom::WebDom`, mounts a
//! [`widgets::page::Page`] over it and turns the page's subscriptions into
//! DOM listeners, intersection observers and preloader timers.
//!
//! Without `hydrate` only the browser-independent helpers (config parsing,
//! key mapping, no-op storage) are compiled, so the crate builds and tests on
//! the host target.

pub mod error;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(err) = app::boot() {
        log::error!("page enhancements disabled: {err}");
    }
}
