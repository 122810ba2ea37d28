//! Skill tag list and skill card click behavior.
//!
//! The tag list bounces until the first click, then stays still for the rest
//! of the page's life. Skill cards expand and collapse on click, except when
//! the click lands on the card's progress bar or percent label.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::consts::{CLASS_SKILL_BAR, CLASS_SKILL_PERCENT};

/// One-way latch for the tag list animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillTagLatch {
    stopped: bool,
}

impl SkillTagLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_stopped(self) -> bool {
        self.stopped
    }

    /// Stop the animation. Returns `true` only on the first call.
    pub fn stop(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.stopped = true;
        true
    }
}

/// Which part of a skill card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClickTarget {
    Body,
    Bar,
    Percent,
}

impl CardClickTarget {
    /// Classify from the `class` attribute of the clicked element (or its
    /// nearest bar/label ancestor).
    #[must_use]
    pub fn from_class_name(class_name: &str) -> Self {
        let mut classes = class_name.split_whitespace();
        if classes.clone().any(|c| c == CLASS_SKILL_BAR) {
            Self::Bar
        } else if classes.any(|c| c == CLASS_SKILL_PERCENT) {
            Self::Percent
        } else {
            Self::Body
        }
    }

    #[must_use]
    pub fn should_toggle(self) -> bool {
        self == Self::Body
    }
}

/// Expanded state of one skill card.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillCard {
    expanded: bool,
}

impl SkillCard {
    #[must_use]
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Handle a click. Returns the new expanded state, or `None` when the
    /// click was on the bar or its label.
    pub fn on_click(&mut self, target: CardClickTarget) -> Option<bool> {
        if !target.should_toggle() {
            return None;
        }
        self.expanded = !self.expanded;
        Some(self.expanded)
    }
}

#[cfg(feature = "hydrate")]
pub use host::{install_cards, install_tags};

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::Cell;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event};

    use super::{CardClickTarget, SkillCard, SkillTagLatch};
    use crate::consts::{CLASS_CARD_EXPANDED, CLASS_SKILLS_STOPPED, SEL_SKILL_CARD, SEL_SKILL_LIST};
    use crate::dom;
    use crate::error::SetupError;

    const SEL_CLICK_EXCLUDED: &str = ".glass-bar, .glass-skill-percent";

    fn click_target(ev: &Event) -> CardClickTarget {
        let Some(target) = ev.target() else {
            return CardClickTarget::Body;
        };
        let Some(target) = target.dyn_ref::<Element>() else {
            return CardClickTarget::Body;
        };
        match target.closest(SEL_CLICK_EXCLUDED) {
            Ok(Some(hit)) => CardClickTarget::from_class_name(&hit.class_name()),
            Ok(None) => CardClickTarget::Body,
            Err(err) => {
                log::debug!("skills: closest failed: {err:?}");
                CardClickTarget::Body
            }
        }
    }

    /// Stop the `.skill-list` bounce on first click.
    pub fn install_tags() -> Result<(), SetupError> {
        let doc = dom::document()?;
        let list = dom::query(&doc, SEL_SKILL_LIST)?;
        let latch = Cell::new(SkillTagLatch::new());
        let list_for_cb = list.clone();
        dom::listen(&list, "click", move |_ev| {
            let mut state = latch.get();
            if state.stop() {
                dom::set_class(&list_for_cb, CLASS_SKILLS_STOPPED, true);
                log::debug!("skills: tag animation stopped");
            }
            latch.set(state);
        })?;
        Ok(())
    }

    /// Toggle `.expanded` on each `.glass-skill-card`.
    pub fn install_cards() -> Result<(), SetupError> {
        let doc = dom::document()?;
        let cards = dom::query_all(&doc, SEL_SKILL_CARD);
        if cards.is_empty() {
            return Err(SetupError::MissingElement(SEL_SKILL_CARD));
        }
        for card in cards {
            let state = Cell::new(SkillCard::new(card.class_list().contains(CLASS_CARD_EXPANDED)));
            let card_for_cb = card.clone();
            dom::listen(&card, "click", move |ev| {
                let mut current = state.get();
                if let Some(expanded) = current.on_click(click_target(&ev)) {
                    dom::set_class(&card_for_cb, CLASS_CARD_EXPANDED, expanded);
                }
                state.set(current);
            })?;
        }
        Ok(())
    }
}
