//! Skill progress bar reveal.
//!
//! When the featured-skills section first comes into view, every card's bar
//! counts up from 0 to the percentage in its `data-percent` attribute, one
//! point per tick. The reveal runs at most once per page load.

#[cfg(test)]
#[path = "skill_bars_test.rs"]
mod skill_bars_test;

/// Fires once, the first time the section crosses into view.
#[derive(Debug, Clone, Copy)]
pub struct RevealLatch {
    margin_px: f64,
    started: bool,
}

impl RevealLatch {
    #[must_use]
    pub fn new(margin_px: f64) -> Self {
        Self { margin_px, started: false }
    }

    #[must_use]
    pub fn has_started(self) -> bool {
        self.started
    }

    /// `section_top` is the section's viewport-relative top. Returns `true`
    /// exactly once, when the section is within `viewport_height - margin` of
    /// the top of the viewport.
    pub fn check(&mut self, section_top: f64, viewport_height: f64) -> bool {
        if self.started || section_top >= viewport_height - self.margin_px {
            return false;
        }
        self.started = true;
        log::debug!("skill bars: reveal triggered at top={section_top}");
        true
    }
}

/// Parse a bar's target percentage: `"85"`, `" 85 "` and `"85%"` are all 85.
/// Values above 100 are clamped; anything non-numeric is rejected.
#[must_use]
pub fn parse_target_percent(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let Ok(value) = digits.parse::<f64>() else {
        return None;
    };
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = value.round().min(100.0) as u8;
    Some(rounded)
}

/// Outcome of one bar tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStep {
    /// Show this width and keep ticking.
    Progress(u8),
    /// Show the target width and stop.
    Done(u8),
}

/// Count-up state for one bar.
#[derive(Debug, Clone, Copy)]
pub struct BarAnimation {
    current: u8,
    target: u8,
}

impl BarAnimation {
    #[must_use]
    pub fn new(target: u8) -> Self {
        Self { current: 0, target: target.min(100) }
    }

    #[must_use]
    pub fn current(self) -> u8 {
        self.current
    }

    #[must_use]
    pub fn target(self) -> u8 {
        self.target
    }

    /// Advance one tick.
    pub fn step(&mut self) -> BarStep {
        if self.current >= self.target {
            self.current = self.target;
            return BarStep::Done(self.target);
        }
        self.current += 1;
        BarStep::Progress(self.current)
    }
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;

    use web_sys::{HtmlElement, Window};

    use super::{BarAnimation, BarStep, RevealLatch, parse_target_percent};
    use crate::config::PageConfig;
    use crate::consts::{ID_FEATURED_SKILLS, SEL_SKILL_BAR, SEL_SKILL_CARD, SEL_SKILL_PERCENT, SKILL_TARGET_ATTRIBUTE};
    use crate::dom;
    use crate::error::SetupError;

    struct Bar {
        bar: HtmlElement,
        label: Option<HtmlElement>,
    }

    impl Bar {
        fn show(&self, percent: u8) {
            let text = format!("{percent}%");
            dom::set_style(&self.bar, "width", &text);
            if let Some(label) = &self.label {
                dom::set_text(label, &text);
            }
        }
    }

    fn animate_all(doc: &web_sys::Document, tick_ms: u32) {
        for card in dom::query_all(doc, SEL_SKILL_CARD) {
            let Some(bar) = dom::query_in(&card, SEL_SKILL_BAR) else {
                continue;
            };
            let Some(target) = bar.get_attribute(SKILL_TARGET_ATTRIBUTE).as_deref().and_then(parse_target_percent)
            else {
                log::debug!("skill bars: skipping bar without a valid {SKILL_TARGET_ATTRIBUTE}");
                continue;
            };
            let bar = Bar { bar, label: dom::query_in(&card, SEL_SKILL_PERCENT) };
            bar.show(0);
            let mut animation = BarAnimation::new(target);
            dom::repeat_while(tick_ms, move || match animation.step() {
                BarStep::Progress(percent) => {
                    bar.show(percent);
                    true
                }
                BarStep::Done(percent) => {
                    bar.show(percent);
                    false
                }
            });
        }
    }

    fn check(window: &Window, section: &HtmlElement, latch: &RefCell<RevealLatch>) -> bool {
        let top = section.get_bounding_client_rect().top();
        latch.borrow_mut().check(top, dom::viewport_height(window))
    }

    /// Watch scrolling until `#featured-skills` is in view, then animate every bar.
    pub fn install(config: &PageConfig) -> Result<(), SetupError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let section = dom::by_id(&doc, ID_FEATURED_SKILLS)?;
        let latch = RefCell::new(RevealLatch::new(config.skills.reveal_margin_px));
        let tick_ms = config.skills.bar_tick_ms;

        if check(&window, &section, &latch) {
            animate_all(&doc, tick_ms);
        }

        let window_for_cb = window.clone();
        dom::listen_passive(&window, "scroll", move |_ev| {
            if latch.borrow().has_started() {
                return;
            }
            if check(&window_for_cb, &section, &latch) {
                animate_all(&doc, tick_ms);
            }
        })?;
        Ok(())
    }
}
