//! Navigation bar glass effect on scroll.
//!
//! `#mainNav` gets the `scrolled` class once the page is scrolled past a small
//! threshold. Scroll events are coalesced to one evaluation per animation
//! frame. In-page link clicks schedule an extra check because a hash jump may
//! not fire enough scroll events to reach the frame path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Frame-coalesced scroll state for the nav bar.
#[derive(Debug, Clone)]
pub struct NavScrollReactor {
    threshold_px: f64,
    pending: bool,
    scrolled: bool,
}

impl NavScrollReactor {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, pending: false, scrolled: false }
    }

    /// Whether the nav currently carries the scrolled class.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether a frame callback is already queued.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// A scroll event fired. Returns `true` when the caller must request an
    /// animation frame; further events before that frame return `false`.
    pub fn on_scroll(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The requested frame arrived. Returns the new class state if it changed.
    pub fn on_frame(&mut self, scroll_y: f64) -> Option<bool> {
        self.pending = false;
        self.evaluate(scroll_y)
    }

    /// Re-evaluate against `scroll_y`. Returns the new class state if it changed.
    pub fn evaluate(&mut self, scroll_y: f64) -> Option<bool> {
        let next = scroll_y > self.threshold_px;
        if next == self.scrolled {
            return None;
        }
        self.scrolled = next;
        Some(next)
    }
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{HtmlElement, Window};

    use super::NavScrollReactor;
    use crate::config::PageConfig;
    use crate::consts::{CLASS_NAV_SCROLLED, ID_MAIN_NAV, SEL_NAV_LINKS};
    use crate::dom;
    use crate::error::SetupError;

    fn recheck(window: &Window, nav: &HtmlElement, reactor: &RefCell<NavScrollReactor>) {
        let changed = reactor.borrow_mut().evaluate(dom::scroll_y(window));
        if let Some(on) = changed {
            dom::set_class(nav, CLASS_NAV_SCROLLED, on);
        }
    }

    /// Wire the scroll listener on `window` and re-checks on `.nav-links a`.
    pub fn install(config: &PageConfig) -> Result<(), SetupError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let nav = dom::by_id(&doc, ID_MAIN_NAV)?;
        let reactor = Rc::new(RefCell::new(NavScrollReactor::new(config.nav.threshold_px)));

        {
            let window_for_cb = window.clone();
            let nav = nav.clone();
            let reactor = Rc::clone(&reactor);
            dom::listen_passive(&window, "scroll", move |_ev| {
                if !reactor.borrow_mut().on_scroll() {
                    return;
                }
                let window = window_for_cb.clone();
                let nav = nav.clone();
                let reactor = Rc::clone(&reactor);
                dom::on_next_frame(move || {
                    let changed = reactor.borrow_mut().on_frame(dom::scroll_y(&window));
                    if let Some(on) = changed {
                        dom::set_class(&nav, CLASS_NAV_SCROLLED, on);
                    }
                });
            })?;
        }

        let delay_ms = config.nav.link_recheck_ms;
        for link in dom::query_all(&doc, SEL_NAV_LINKS) {
            let window = window.clone();
            let nav = nav.clone();
            let reactor = Rc::clone(&reactor);
            dom::listen(&link, "click", move |_ev| {
                let window = window.clone();
                let nav = nav.clone();
                let reactor = Rc::clone(&reactor);
                dom::after(delay_ms, move || recheck(&window, &nav, &reactor));
            })?;
        }

        reactor.borrow_mut().evaluate(dom::scroll_y(&window));
        dom::set_class(&nav, CLASS_NAV_SCROLLED, reactor.borrow().is_scrolled());
        log::debug!("nav: installed");
        Ok(())
    }
}
