//! "About" flip card.
//!
//! The toggle button flips the card to its back face and, once the flip
//! transition is over, moves focus to the close button; closing reverses
//! both. The card is kept as tall as the taller face so neither side clips.
//! On phones held upright the stylesheet turns the flip off, and so does this
//! module.

#[cfg(test)]
#[path = "flip_card_test.rs"]
mod flip_card_test;

use crate::config::FlipTimings;

/// Element that receives focus after a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// `#aboutCloseBtn`, after opening.
    Close,
    /// `#aboutToggleBtn`, after closing.
    Toggle,
}

/// What triggered a height re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCause {
    /// A `ResizeObserver` notification on one of the faces.
    Content,
    /// A window `resize` event.
    Window,
    /// An `orientationchange` event.
    Orientation,
}

/// DOM effect requested by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAction {
    /// Add or remove the `flipped` class.
    SetFlipped(bool),
    /// Set the card height to the taller face.
    RecalculateHeight,
    /// Drop the inline height and let the stylesheet size the card.
    ClearHeight,
    /// Focus `target` after `delay_ms`.
    ScheduleFocus { target: FocusTarget, delay_ms: u32 },
}

/// Card height that fits both faces.
#[must_use]
pub fn container_height(front: f64, back: f64) -> f64 {
    front.max(back).max(0.0)
}

/// Flip state for the about card.
#[derive(Debug, Clone)]
pub struct FlipCard {
    enabled: bool,
    flipped: bool,
    timings: FlipTimings,
}

impl FlipCard {
    /// `enabled` is `false` while the phone-portrait query matches.
    #[must_use]
    pub fn new(enabled: bool, timings: FlipTimings) -> Self {
        Self { enabled, flipped: false, timings }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn initial_actions(&self) -> Vec<FlipAction> {
        if self.enabled { vec![FlipAction::RecalculateHeight] } else { vec![FlipAction::ClearHeight] }
    }

    /// Flip to the back face.
    pub fn open(&mut self) -> Vec<FlipAction> {
        if !self.enabled || self.flipped {
            return Vec::new();
        }
        self.flipped = true;
        log::debug!("flip card: opened");
        vec![
            FlipAction::SetFlipped(true),
            FlipAction::RecalculateHeight,
            FlipAction::ScheduleFocus { target: FocusTarget::Close, delay_ms: self.timings.transition_ms },
        ]
    }

    /// Flip back to the front face.
    pub fn close(&mut self) -> Vec<FlipAction> {
        if !self.enabled || !self.flipped {
            return Vec::new();
        }
        self.flipped = false;
        log::debug!("flip card: closed");
        vec![
            FlipAction::SetFlipped(false),
            FlipAction::RecalculateHeight,
            FlipAction::ScheduleFocus { target: FocusTarget::Toggle, delay_ms: self.timings.transition_ms },
        ]
    }

    /// The phone-portrait query changed. Disabling un-flips the card.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<FlipAction> {
        if enabled == self.enabled {
            return Vec::new();
        }
        self.enabled = enabled;
        if enabled {
            return vec![FlipAction::RecalculateHeight];
        }
        let mut actions = Vec::new();
        if self.flipped {
            self.flipped = false;
            actions.push(FlipAction::SetFlipped(false));
        }
        actions.push(FlipAction::ClearHeight);
        actions
    }

    /// Settling delay before re-measuring after `cause`, or `None` while disabled.
    #[must_use]
    pub fn resize_delay(&self, cause: ResizeCause) -> Option<u32> {
        if !self.enabled {
            return None;
        }
        Some(match cause {
            ResizeCause::Content | ResizeCause::Window => self.timings.resize_settle_ms,
            ResizeCause::Orientation => self.timings.orientation_settle_ms,
        })
    }
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{HtmlElement, MediaQueryList, ResizeObserver};

    use super::{FlipAction, FlipCard, FocusTarget, ResizeCause, container_height};
    use crate::config::PageConfig;
    use crate::consts::{
        CLASS_CARD_FLIPPED, ID_ABOUT_CARD, ID_ABOUT_CLOSE, ID_ABOUT_TOGGLE, PHONE_PORTRAIT_QUERY, SEL_FLIP_BACK,
        SEL_FLIP_FACE, SEL_FLIP_FRONT,
    };
    use crate::dom;
    use crate::error::SetupError;

    struct FlipHost {
        card: HtmlElement,
        front: HtmlElement,
        back: HtmlElement,
        toggle: HtmlElement,
        close: HtmlElement,
        state: RefCell<FlipCard>,
    }

    impl FlipHost {
        fn recalculate_height(&self) {
            for face in dom::query_all_in(&self.card, SEL_FLIP_FACE) {
                dom::set_style(&face, "height", "auto");
            }
            let height = container_height(f64::from(self.front.scroll_height()), f64::from(self.back.scroll_height()));
            dom::set_style(&self.card, "height", &format!("{height}px"));
        }

        fn run(self: &Rc<Self>, actions: Vec<FlipAction>) {
            for action in actions {
                match action {
                    FlipAction::SetFlipped(on) => dom::set_class(&self.card, CLASS_CARD_FLIPPED, on),
                    FlipAction::RecalculateHeight => self.recalculate_height(),
                    FlipAction::ClearHeight => dom::clear_style(&self.card, "height"),
                    FlipAction::ScheduleFocus { target, delay_ms } => {
                        let element = match target {
                            FocusTarget::Close => self.close.clone(),
                            FocusTarget::Toggle => self.toggle.clone(),
                        };
                        dom::after(delay_ms, move || dom::focus(&element));
                    }
                }
            }
        }

        fn on_resize(self: &Rc<Self>, cause: ResizeCause) {
            let Some(delay_ms) = self.state.borrow().resize_delay(cause) else {
                return;
            };
            let host = Rc::clone(self);
            dom::after(delay_ms, move || {
                if host.state.borrow().is_enabled() {
                    host.recalculate_height();
                }
            });
        }
    }

    fn observe_faces(host: &Rc<FlipHost>) -> Result<(), SetupError> {
        let host_for_cb = Rc::clone(host);
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |_entries: JsValue| {
            host_for_cb.on_resize(ResizeCause::Content);
        });
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&host.front);
        observer.observe(&host.back);
        callback.forget();
        Ok(())
    }

    /// Wire the toggle/close buttons, media query, and resize sources.
    pub fn install(config: &PageConfig) -> Result<(), SetupError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let card = dom::by_id(&doc, ID_ABOUT_CARD)?;
        let toggle = dom::by_id(&doc, ID_ABOUT_TOGGLE)?;
        let close = dom::by_id(&doc, ID_ABOUT_CLOSE)?;
        let front = dom::query_in(&card, SEL_FLIP_FRONT).ok_or(SetupError::MissingElement(SEL_FLIP_FRONT))?;
        let back = dom::query_in(&card, SEL_FLIP_BACK).ok_or(SetupError::MissingElement(SEL_FLIP_BACK))?;

        let portrait = dom::media_query(&window, PHONE_PORTRAIT_QUERY);
        let enabled = !portrait.as_ref().is_some_and(MediaQueryList::matches);
        let state = RefCell::new(FlipCard::new(enabled, config.flip));
        let host = Rc::new(FlipHost { card, front, back, toggle, close, state });
        let initial = host.state.borrow().initial_actions();
        host.run(initial);

        {
            let host_for_cb = Rc::clone(&host);
            dom::listen(&host.toggle, "click", move |_ev| {
                let actions = host_for_cb.state.borrow_mut().open();
                host_for_cb.run(actions);
            })?;
        }
        {
            let host_for_cb = Rc::clone(&host);
            dom::listen(&host.close, "click", move |_ev| {
                let actions = host_for_cb.state.borrow_mut().close();
                host_for_cb.run(actions);
            })?;
        }
        if let Some(list) = portrait {
            let host_for_cb = Rc::clone(&host);
            let list_for_cb = list.clone();
            dom::listen(&list, "change", move |_ev| {
                let actions = host_for_cb.state.borrow_mut().set_enabled(!list_for_cb.matches());
                host_for_cb.run(actions);
            })?;
        }
        {
            let host_for_cb = Rc::clone(&host);
            dom::listen(&window, "resize", move |_ev| host_for_cb.on_resize(ResizeCause::Window))?;
        }
        {
            let host_for_cb = Rc::clone(&host);
            dom::listen(&window, "orientationchange", move |_ev| host_for_cb.on_resize(ResizeCause::Orientation))?;
        }
        if let Err(err) = observe_faces(&host) {
            log::debug!("flip card: no ResizeObserver, relying on window events: {err}");
        }

        log::debug!("flip card: installed (enabled={enabled})");
        Ok(())
    }
}
