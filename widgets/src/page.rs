//! The assembled page: every widget mounted over one document.
//!
//! `Page` is the single entry point the host talks to. [`Page::mount`] looks
//! up each affordance with the configured selectors and builds only the
//! widgets whose elements exist; a missing element never fails the mount, it
//! just leaves that affordance unwired. The host then installs listeners for
//! [`Page::subscriptions`], observers for [`Page::observations`], and feeds
//! every event back through [`Page::handle`].

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::SiteConfig;
use crate::consts::{DRAWER_LOCK_OWNER, LIGHTBOX_LOCK_OWNER};
use crate::dom::Dom;
use crate::drawer::{DrawerController, DrawerParts};
use crate::events::{Event, EventKind, Outcome, Subscription, Target};
use crate::lightbox::Lightbox;
use crate::menu;
use crate::observe::{ObserveKind, Observation, Reveal, SectionTracker};
use crate::preloader::Preloader;
use crate::scroll::{self, BackToTop, NavScroll};
use crate::scroll_lock::ScrollLock;
use crate::theme::{PreferenceStore, ThemeToggle};

/// Where the menus are cloned from and into.
struct MenuSlots<N> {
    source: N,
    drawer: Option<N>,
    footer: Option<N>,
}

pub struct Page<D: Dom> {
    dom: D,
    store: Box<dyn PreferenceStore>,
    config: SiteConfig,
    nav: Option<D::Node>,
    main: Option<D::Node>,
    skip_link: Option<D::Node>,
    anchors: Vec<D::Node>,
    theme: Option<ThemeToggle<D::Node>>,
    drawer: Option<DrawerController<D::Node>>,
    menus: Option<MenuSlots<D::Node>>,
    nav_scroll: Option<NavScroll<D::Node>>,
    back_to_top: Option<BackToTop<D::Node>>,
    lightbox: Option<Lightbox<D::Node>>,
    lightbox_triggers: Vec<D::Node>,
    reveal: Reveal<D::Node>,
    sections: SectionTracker<D::Node>,
    preloader: Option<Preloader<D::Node>>,
}

impl<D: Dom> Page<D> {
    /// Look up every affordance and build the widgets that can work.
    pub fn mount(mut dom: D, store: Box<dyn PreferenceStore>, config: SiteConfig) -> Self {
        let sel = config.selectors.clone();
        let body = dom.body();

        let theme = body.clone().map(|body| {
            let button = dom.query(&sel.theme_toggle);
            ThemeToggle::init(&mut dom, store.as_ref(), body, button, config.theme.clone())
        });

        // Collected before the menus are cloned, so drawer copies are not
        // smooth-scroll wired.
        let anchors = dom.query_all(&sel.anchors);
        let skip_link = dom.query(&sel.skip_link);
        let main = dom.query(&sel.main);
        let nav = dom.query(&sel.nav);

        let drawer = match (dom.query(&sel.drawer), body.clone()) {
            (Some(panel), Some(body)) => {
                let parts = DrawerParts {
                    close: dom.query_within(&panel, &sel.drawer_close),
                    trigger: dom.query(&sel.drawer_toggle),
                    overlay: dom.query(&sel.drawer_overlay),
                    panel,
                };
                Some(DrawerController::new(parts, ScrollLock::new(body, DRAWER_LOCK_OWNER)))
            }
            _ => {
                log::debug!("no drawer panel matches {:?}", sel.drawer);
                None
            }
        };

        let menus = dom.query(&sel.nav_menu).map(|source| MenuSlots {
            source,
            drawer: dom.query(&sel.drawer_menu),
            footer: dom.query(&sel.footer_menu),
        });

        let nav_scroll = nav.clone().map(|nav| NavScroll::new(nav, &config.scroll));
        let back_to_top = dom.query(&sel.back_to_top).map(|b| BackToTop::new(b, &config.scroll));
        let reveal = Reveal::new(dom.query_all(&sel.reveal));
        let sections = SectionTracker::new(dom.query_all(&sel.sections), dom.query_all(&sel.section_links));

        let lightbox_triggers = dom.query_all(&sel.lightbox_triggers);
        let lightbox = match body.as_ref() {
            Some(body) if !lightbox_triggers.is_empty() => {
                let lock = ScrollLock::new(body.clone(), LIGHTBOX_LOCK_OWNER);
                Lightbox::build(&mut dom, body, lock)
            }
            _ => None,
        };

        let preloader = dom.query(&sel.preloader).map(Preloader::new);

        let mut page = Self {
            dom,
            store,
            config,
            nav,
            main,
            skip_link,
            anchors,
            theme,
            drawer,
            menus,
            nav_scroll,
            back_to_top,
            lightbox,
            lightbox_triggers,
            reveal,
            sections,
            preloader,
        };
        page.populate_menus();
        page
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn drawer(&self) -> Option<&DrawerController<D::Node>> {
        self.drawer.as_ref()
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox<D::Node>> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&ThemeToggle<D::Node>> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn preloader(&self) -> Option<&Preloader<D::Node>> {
        self.preloader.as_ref()
    }

    #[must_use]
    pub fn reveal(&self) -> &Reveal<D::Node> {
        &self.reveal
    }

    // --- Drawer / lightbox API ---

    pub fn open_drawer(&mut self) -> bool {
        self.drawer.as_mut().is_some_and(|d| d.open(&mut self.dom))
    }

    pub fn close_drawer(&mut self) -> bool {
        self.drawer.as_mut().is_some_and(|d| d.close(&mut self.dom))
    }

    pub fn open_lightbox(&mut self, image_url: &str, caption: &str, trigger: Option<D::Node>) -> bool {
        self.lightbox
            .as_mut()
            .is_some_and(|lb| lb.open(&mut self.dom, image_url, caption, trigger))
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.as_mut().is_some_and(|lb| lb.close(&mut self.dom))
    }

    /// Rebuild the drawer and footer menus from the nav list.
    ///
    /// Returns subscriptions for the new drawer links; the old links are gone
    /// from the document along with their listeners.
    pub fn populate_menus(&mut self) -> Vec<Subscription<D::Node>> {
        let Some(slots) = &self.menus else {
            return Vec::new();
        };
        let links = menu::populate(&mut self.dom, &slots.source, slots.drawer.as_ref(), slots.footer.as_ref());
        let Some(drawer) = self.drawer.as_mut() else {
            return Vec::new();
        };
        drawer.set_links(links);
        drawer.links()
            .iter()
            .map(|link| Subscription::on(link.clone(), EventKind::Click, Target::DrawerLink))
            .collect()
    }

    // --- Wiring ---

    /// Every listener the host must install, in installation order.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<Subscription<D::Node>> {
        let mut subs = Vec::new();

        if let Some(button) = self.theme.as_ref().and_then(ThemeToggle::button) {
            subs.push(Subscription::on(button.clone(), EventKind::Click, Target::ThemeToggle));
        }
        for (index, anchor) in self.anchors.iter().enumerate() {
            subs.push(Subscription::on(anchor.clone(), EventKind::Click, Target::Anchor(index)));
        }
        if let Some(skip) = &self.skip_link {
            subs.push(Subscription::on(skip.clone(), EventKind::Click, Target::SkipLink));
        }

        if let Some(drawer) = &self.drawer {
            if let Some(trigger) = drawer.trigger() {
                subs.push(Subscription::on(trigger.clone(), EventKind::Click, Target::DrawerToggle));
            }
            if let Some(overlay) = drawer.overlay() {
                subs.push(Subscription::on(overlay.clone(), EventKind::Click, Target::DrawerOverlay));
            }
            if let Some(close) = drawer.close_control() {
                subs.push(Subscription::on(close.clone(), EventKind::Click, Target::DrawerClose));
            }
            for link in drawer.links() {
                subs.push(Subscription::on(link.clone(), EventKind::Click, Target::DrawerLink));
            }
            subs.push(Subscription::document(EventKind::KeyDown, Target::DrawerKeys));
        }

        if self.nav_scroll.is_some() || self.back_to_top.is_some() {
            subs.push(Subscription::window(EventKind::Scroll, Target::PageScroll));
        }
        if let Some(back) = &self.back_to_top {
            subs.push(Subscription::on(back.button().clone(), EventKind::Click, Target::BackToTop));
        }

        if let Some(lightbox) = &self.lightbox {
            for (index, trigger) in self.lightbox_triggers.iter().enumerate() {
                subs.push(Subscription::on(trigger.clone(), EventKind::Click, Target::LightboxTrigger(index)));
            }
            subs.push(Subscription::on(lightbox.root().clone(), EventKind::Click, Target::LightboxSurface));
            subs.push(Subscription::document(EventKind::KeyDown, Target::LightboxKeys));
        }

        if self.preloader.is_some() {
            subs.push(Subscription::window(EventKind::Load, Target::PageLoad));
        }
        subs
    }

    /// Nodes the host should watch with intersection observers.
    #[must_use]
    pub fn observations(&self) -> Vec<Observation<D::Node>> {
        let reveal = self.reveal.pending().iter().map(|node| Observation {
            node: node.clone(),
            kind: ObserveKind::Reveal,
            threshold: self.config.observe.reveal_threshold,
        });
        let sections = self.sections.sections().iter().map(|node| Observation {
            node: node.clone(),
            kind: ObserveKind::Section,
            threshold: self.config.observe.section_threshold,
        });
        reveal.chain(sections).collect()
    }

    // --- Dispatch ---

    /// Deliver one subscribed event.
    pub fn handle(&mut self, target: Target, event: &Event<D::Node>) -> Outcome {
        match (target, event) {
            (Target::DrawerToggle, Event::Click { .. }) => match self.drawer.as_mut() {
                Some(drawer) => {
                    drawer.toggle(&mut self.dom);
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
            (Target::DrawerOverlay | Target::DrawerClose | Target::DrawerLink, Event::Click { .. }) => {
                if self.close_drawer() { Outcome::Handled } else { Outcome::Ignored }
            }
            (Target::DrawerKeys, Event::Key(key)) => match self.drawer.as_mut() {
                Some(drawer) => drawer.handle_key(&mut self.dom, key),
                None => Outcome::Ignored,
            },
            (Target::LightboxTrigger(index), Event::Click { .. }) => self.open_from_trigger(index),
            (Target::LightboxSurface, Event::Click { origin }) => match self.lightbox.as_mut() {
                Some(lightbox) => lightbox.handle_click(&mut self.dom, origin.as_ref()),
                None => Outcome::Ignored,
            },
            (Target::LightboxKeys, Event::Key(key)) => match self.lightbox.as_mut() {
                Some(lightbox) => lightbox.handle_key(&mut self.dom, key),
                None => Outcome::Ignored,
            },
            (Target::ThemeToggle, Event::Click { .. }) => match self.theme.as_mut() {
                Some(theme) => {
                    theme.toggle(&mut self.dom, self.store.as_mut());
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
            (Target::PageScroll, Event::Scroll { y }) => {
                if let Some(nav) = self.nav_scroll.as_mut() {
                    nav.on_scroll(&mut self.dom, *y);
                }
                if let Some(back) = &self.back_to_top {
                    back.on_scroll(&mut self.dom, *y);
                }
                Outcome::Handled
            }
            (Target::BackToTop, Event::Click { .. }) => match &self.back_to_top {
                Some(back) => back.activate(&mut self.dom),
                None => Outcome::Ignored,
            },
            (Target::SkipLink, Event::Click { .. }) => scroll::skip_to_main(&mut self.dom, self.main.as_ref()),
            (Target::Anchor(index), Event::Click { .. }) => match self.anchors.get(index) {
                Some(link) => {
                    let gap = self.config.scroll.anchor_gap;
                    scroll::follow_anchor(&mut self.dom, link, self.nav.as_ref(), gap)
                }
                None => Outcome::Ignored,
            },
            (Target::PageLoad, Event::Load) => {
                if self.dismiss_preloader() { Outcome::Handled } else { Outcome::Ignored }
            }
            _ => Outcome::Ignored,
        }
    }

    fn open_from_trigger(&mut self, index: usize) -> Outcome {
        let (Some(link), Some(lightbox)) = (self.lightbox_triggers.get(index), self.lightbox.as_mut()) else {
            return Outcome::Ignored;
        };
        let image_url = self.dom.attribute(link, "href").unwrap_or_default();
        let caption = self
            .dom
            .query_within(link, &self.config.selectors.lightbox_caption)
            .map(|heading| self.dom.text_content(&heading))
            .unwrap_or_default();
        lightbox.open(&mut self.dom, &image_url, caption.trim(), Some(link.clone()));
        Outcome::PreventDefault
    }

    /// Report an intersecting node. Returns `true` when the host should stop
    /// observing it.
    pub fn on_intersect(&mut self, kind: ObserveKind, node: &D::Node) -> bool {
        match kind {
            ObserveKind::Reveal => self.reveal.on_intersect(&mut self.dom, node),
            ObserveKind::Section => {
                self.sections.on_intersect(&mut self.dom, node);
                false
            }
        }
    }

    /// Reveal every pending target immediately.
    pub fn reveal_all(&mut self) {
        self.reveal.reveal_all(&mut self.dom);
    }

    // --- Preloader ---

    /// Fade the preloader out. `true` on the first call only.
    pub fn dismiss_preloader(&mut self) -> bool {
        self.preloader.as_mut().is_some_and(|p| p.dismiss(&mut self.dom))
    }

    /// Remove a faded preloader from the document.
    pub fn remove_preloader(&mut self) -> bool {
        self.preloader.as_mut().is_some_and(|p| p.remove(&mut self.dom))
    }
}
