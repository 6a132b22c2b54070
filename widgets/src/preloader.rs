//! Full-page loading screen dismissed once the page has loaded.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderState {
    Visible,
    /// Faded out, waiting to be removed from the document.
    Fading,
    Removed,
}

/// Dismissal happens at most once even though both window `load` and the
/// fallback timer ask for it.
pub struct Preloader<N> {
    node: N,
    state: PreloaderState,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Preloader<N> {
    #[must_use]
    pub fn new(node: N) -> Self {
        Self { node, state: PreloaderState::Visible }
    }

    #[must_use]
    pub fn state(&self) -> PreloaderState {
        self.state
    }

    /// Start fading out. Returns `true` only on the first call, when the host
    /// should schedule [`Preloader::remove`].
    pub fn dismiss<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        if self.state != PreloaderState::Visible {
            return false;
        }
        dom.set_style(&self.node, "opacity", "0");
        self.state = PreloaderState::Fading;
        true
    }

    /// Detach the faded preloader.
    pub fn remove<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        if self.state != PreloaderState::Fading {
            return false;
        }
        dom.remove_node(&self.node);
        self.state = PreloaderState::Removed;
        log::debug!("preloader removed");
        true
    }
}
