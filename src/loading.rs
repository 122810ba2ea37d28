//! Loading screen gate.
//!
//! The page content stays hidden behind an overlay until the visitor presses
//! the enter button. The press starts a fixed-length progress animation
//! driven by wall-clock time (it does not measure any real loading), and at
//! 100% the overlay fades out and the content is revealed.
//!
//! ```text
//! Idle(0%) --confirm--> Running(0..99%) --tick>=100--> Complete(100%)
//!          --BeginFade (fade delay)--> FadingOut --Finish (hide delay)--> Hidden
//! ```
//!
//! The confirm transition fires once; the button is disabled in the same
//! step. The timed transitions cannot be cancelled or reversed.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::fmt;

use crate::config::LoadingTimings;

/// Where the loading screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingPhase {
    /// Waiting for the enter button.
    Idle,
    /// Progress ticking. `percent` never decreases.
    Running { started_ms: f64, percent: u8 },
    /// Reached 100%; waiting to start the fade.
    Complete,
    /// Overlay has the `hidden` class and is transitioning out.
    FadingOut,
    /// Overlay removed, content shown.
    Hidden,
}

impl fmt::Display for LoadingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Running { percent, .. } => write!(f, "running({percent}%)"),
            Self::Complete => f.write_str("complete"),
            Self::FadingOut => f.write_str("fading-out"),
            Self::Hidden => f.write_str("hidden"),
        }
    }
}

/// Delayed transitions, named so the host can schedule them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTimer {
    /// Complete -> FadingOut.
    BeginFade,
    /// FadingOut -> Hidden.
    Finish,
}

/// DOM effect requested by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingAction {
    /// Hide `#portfolio-content`.
    HideContent,
    /// Set the bar width and percent text.
    SetProgress(u8),
    /// Enable or disable `#loading-enter`.
    SetConfirmEnabled(bool),
    /// Lower the enter button's opacity.
    DimConfirm,
    /// Start calling [`LoadingSimulator::tick`] every `period_ms`.
    StartTicker { period_ms: u32 },
    /// Stop the ticker started by `StartTicker`.
    StopTicker,
    /// Call [`LoadingSimulator::fire`] with `timer` after `delay_ms`.
    Schedule { timer: LoadingTimer, delay_ms: u32 },
    /// Add the `hidden` class to the overlay, starting its fade.
    AddHiddenClass,
    /// Take the overlay out of layout.
    RemoveOverlay,
    /// Show `#portfolio-content`.
    ShowContent,
    /// Restore normal page scrolling.
    RestoreScroll,
}

/// Percent complete after `elapsed_ms` of a `duration_ms` run, in `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(elapsed_ms: f64, duration_ms: u32) -> u8 {
    if duration_ms == 0 {
        return 100;
    }
    let elapsed = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };
    (100.0 * elapsed / f64::from(duration_ms)).round().min(100.0) as u8
}

/// State machine behind the loading overlay.
#[derive(Debug, Clone)]
pub struct LoadingSimulator {
    timings: LoadingTimings,
    phase: LoadingPhase,
}

impl LoadingSimulator {
    #[must_use]
    pub fn new(timings: LoadingTimings) -> Self {
        Self { timings, phase: LoadingPhase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Percent currently displayed.
    #[must_use]
    pub fn percent(&self) -> u8 {
        match self.phase {
            LoadingPhase::Idle => 0,
            LoadingPhase::Running { percent, .. } => percent,
            LoadingPhase::Complete | LoadingPhase::FadingOut | LoadingPhase::Hidden => 100,
        }
    }

    /// Effects that set up the idle screen.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<LoadingAction> {
        vec![
            LoadingAction::HideContent,
            LoadingAction::SetProgress(self.percent()),
            LoadingAction::SetConfirmEnabled(true),
        ]
    }

    /// The enter button was pressed at `now_ms`. Only the first press counts.
    pub fn confirm(&mut self, now_ms: f64) -> Vec<LoadingAction> {
        if self.phase != LoadingPhase::Idle {
            return Vec::new();
        }
        self.transition(LoadingPhase::Running { started_ms: now_ms, percent: 0 });
        vec![
            LoadingAction::SetConfirmEnabled(false),
            LoadingAction::DimConfirm,
            LoadingAction::SetProgress(0),
            LoadingAction::StartTicker { period_ms: self.timings.tick_ms },
        ]
    }

    /// A ticker period elapsed; `now_ms` is the current wall-clock time.
    pub fn tick(&mut self, now_ms: f64) -> Vec<LoadingAction> {
        let LoadingPhase::Running { started_ms, percent: shown } = self.phase else {
            return Vec::new();
        };
        let percent = progress_percent(now_ms - started_ms, self.timings.duration_ms).max(shown);
        if percent >= 100 {
            self.transition(LoadingPhase::Complete);
            return vec![
                LoadingAction::StopTicker,
                LoadingAction::SetProgress(100),
                LoadingAction::Schedule { timer: LoadingTimer::BeginFade, delay_ms: self.timings.fade_delay_ms },
            ];
        }
        if percent == shown {
            return Vec::new();
        }
        self.phase = LoadingPhase::Running { started_ms, percent };
        vec![LoadingAction::SetProgress(percent)]
    }

    /// A scheduled timer fired. Timers that do not match the phase are ignored.
    pub fn fire(&mut self, timer: LoadingTimer) -> Vec<LoadingAction> {
        match (self.phase, timer) {
            (LoadingPhase::Complete, LoadingTimer::BeginFade) => {
                self.transition(LoadingPhase::FadingOut);
                vec![
                    LoadingAction::AddHiddenClass,
                    LoadingAction::Schedule { timer: LoadingTimer::Finish, delay_ms: self.timings.hide_delay_ms },
                ]
            }
            (LoadingPhase::FadingOut, LoadingTimer::Finish) => {
                self.transition(LoadingPhase::Hidden);
                vec![LoadingAction::RemoveOverlay, LoadingAction::ShowContent, LoadingAction::RestoreScroll]
            }
            _ => Vec::new(),
        }
    }

    fn transition(&mut self, next: LoadingPhase) {
        log::debug!("loading: {} -> {}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::HtmlElement;

    use super::{LoadingAction, LoadingSimulator};
    use crate::config::PageConfig;
    use crate::consts::{
        CLASS_LOADING_HIDDEN, ID_LOADING_BAR, ID_LOADING_ENTER, ID_LOADING_PERCENT, ID_LOADING_SCREEN,
        ID_PORTFOLIO_CONTENT, LOADING_CONFIRM_DIM_OPACITY,
    };
    use crate::dom;
    use crate::error::SetupError;

    struct LoadingHost {
        screen: HtmlElement,
        bar: HtmlElement,
        percent: HtmlElement,
        enter: HtmlElement,
        content: HtmlElement,
        body: Option<HtmlElement>,
        sim: RefCell<LoadingSimulator>,
    }

    impl LoadingHost {
        fn run(self: &Rc<Self>, actions: Vec<LoadingAction>) {
            for action in actions {
                match action {
                    LoadingAction::HideContent => dom::set_style(&self.content, "display", "none"),
                    LoadingAction::SetProgress(percent) => {
                        let text = format!("{percent}%");
                        dom::set_style(&self.bar, "width", &text);
                        dom::set_text(&self.percent, &text);
                    }
                    LoadingAction::SetConfirmEnabled(enabled) => {
                        dom::report(self.enter.toggle_attribute_with_force("disabled", !enabled), "disabled");
                    }
                    LoadingAction::DimConfirm => dom::set_style(&self.enter, "opacity", LOADING_CONFIRM_DIM_OPACITY),
                    LoadingAction::StartTicker { period_ms } => self.start_ticker(period_ms),
                    // The ticker loop sees this in the batch returned by `tick` and ends itself.
                    LoadingAction::StopTicker => {}
                    LoadingAction::Schedule { timer, delay_ms } => {
                        let host = Rc::clone(self);
                        dom::after(delay_ms, move || {
                            let actions = host.sim.borrow_mut().fire(timer);
                            host.run(actions);
                        });
                    }
                    LoadingAction::AddHiddenClass => dom::set_class(&self.screen, CLASS_LOADING_HIDDEN, true),
                    LoadingAction::RemoveOverlay => dom::set_style(&self.screen, "display", "none"),
                    LoadingAction::ShowContent => dom::set_style(&self.content, "display", "block"),
                    LoadingAction::RestoreScroll => {
                        if let Some(body) = &self.body {
                            dom::set_style(body, "overflow", "auto");
                        }
                    }
                }
            }
        }

        fn start_ticker(self: &Rc<Self>, period_ms: u32) {
            let host = Rc::clone(self);
            dom::repeat_while(period_ms, move || {
                let actions = host.sim.borrow_mut().tick(dom::now_ms());
                let keep_going = !actions.contains(&LoadingAction::StopTicker);
                host.run(actions);
                keep_going
            });
        }
    }

    /// Gate `#portfolio-content` behind `#loading-screen`.
    pub fn install(config: &PageConfig) -> Result<(), SetupError> {
        let doc = dom::document()?;
        let host = Rc::new(LoadingHost {
            screen: dom::by_id(&doc, ID_LOADING_SCREEN)?,
            bar: dom::by_id(&doc, ID_LOADING_BAR)?,
            percent: dom::by_id(&doc, ID_LOADING_PERCENT)?,
            enter: dom::by_id(&doc, ID_LOADING_ENTER)?,
            content: dom::by_id(&doc, ID_PORTFOLIO_CONTENT)?,
            body: doc.body(),
            sim: RefCell::new(LoadingSimulator::new(config.loading)),
        });
        let initial = host.sim.borrow().initial_actions();
        host.run(initial);

        let host_for_cb = Rc::clone(&host);
        dom::listen(&host.enter, "click", move |_ev| {
            let actions = host_for_cb.sim.borrow_mut().confirm(dom::now_ms());
            host_for_cb.run(actions);
        })?;
        log::debug!("loading: installed");
        Ok(())
    }
}
