//! Shared class names, attribute names and default distances for the widgets crate.

// ── Classes ─────────────────────────────────────────────────────

/// Marks the drawer panel, overlay and trigger (and the lightbox) as open.
pub const OPEN_CLASS: &str = "open";

/// Added to the nav bar once the page has scrolled past the shrink distance.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Added to the nav bar while it is auto-hidden.
pub const HIDDEN_CLASS: &str = "hidden";

/// Added to the back-to-top button while it should be visible.
pub const SHOW_CLASS: &str = "show";

/// Added to reveal targets once they have intersected the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Added to the nav link of the section currently in view.
pub const ACTIVE_CLASS: &str = "active";

// ── Attributes ──────────────────────────────────────────────────

/// Space-separated set of widgets currently holding the page scroll lock.
pub const SCROLL_LOCK_ATTR: &str = "data-scroll-lock";

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_CURRENT: &str = "aria-current";

// ── Scroll lock owners ──────────────────────────────────────────

pub const DRAWER_LOCK_OWNER: &str = "drawer";
pub const LIGHTBOX_LOCK_OWNER: &str = "lightbox";

// ── Distances (CSS pixels) ──────────────────────────────────────

/// Scroll offset after which the nav bar gets the `scrolled` class.
pub const NAV_SCROLLED_AFTER_PX: f64 = 10.0;

/// Scroll offset below which the nav bar is never auto-hidden.
pub const NAV_HIDE_AFTER_PX: f64 = 120.0;

/// Scroll offset after which the back-to-top button is shown.
pub const BACK_TO_TOP_AFTER_PX: f64 = 400.0;

/// Gap kept between the nav bar and an anchor target after a smooth scroll.
pub const ANCHOR_GAP_PX: f64 = 20.0;

// ── Observer thresholds ─────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const SECTION_THRESHOLD: f64 = 0.52;

// ── Preloader ───────────────────────────────────────────────────

/// Dismiss the preloader even if `load` never fires.
pub const PRELOADER_FALLBACK_MS: u32 = 3000;

/// Delay between fading the preloader out and removing it.
pub const PRELOADER_FADE_MS: u32 = 500;
