//! Page interaction layer for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It wires a
//! handful of independent, cosmetic behaviors to the existing markup: the
//! light/dark theme toggle, the nav bar's scrolled style, smooth hash-link
//! scrolling, the skill tags and cards, the skill bar reveal, the "about"
//! flip card, and the loading screen that gates the content.
//!
//! Every behavior is split the same way. A plain struct owns the state and
//! turns events into a list of actions; it has no browser dependency and is
//! unit-tested natively. A `host` submodule, compiled with the `hydrate`
//! feature, finds the elements, binds listeners and timers, and applies the
//! actions to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Setup order and start-up |
//! | [`loading`] | Loading screen state machine |
//! | [`theme`] | Light/dark theme controller |
//! | [`nav`] | Frame-coalesced nav scroll state |
//! | [`anchor`] | Smooth hash-link scrolling |
//! | [`skills`] | Skill tag latch and skill card toggle |
//! | [`skill_bars`] | One-shot skill bar reveal |
//! | [`flip_card`] | About flip card and height sync |
//! | [`scheduler`] | Virtual-time timer queue |
//! | [`storage`] | Preference store port |
//! | [`config`] | Timings, overridable from the page |
//! | [`consts`] | Default timings and DOM names |
//! | [`error`] | Setup errors |

pub mod anchor;
pub mod boot;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod flip_card;
pub mod loading;
pub mod nav;
pub mod scheduler;
pub mod skill_bars;
pub mod skills;
pub mod storage;
pub mod theme;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }
    if let Err(err) = boot::run_when_ready() {
        log::warn!("page interactions disabled: {err}");
    }
}
