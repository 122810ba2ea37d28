//! Page bootstrapper.
//!
//! Once the document is interactive, each handler's setup routine runs
//! exactly once, in [`SETUP_ORDER`]. Routines share no state, and one that
//! finds its markup missing is skipped without affecting the others.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::config::PageConfig;

/// One independent page behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Theme,
    Nav,
    SmoothScroll,
    SkillTags,
    SkillCards,
    SkillBars,
    AboutFlip,
    Loading,
}

/// Fixed installation order.
pub const SETUP_ORDER: [Handler; 8] = [
    Handler::Theme,
    Handler::Nav,
    Handler::SmoothScroll,
    Handler::SkillTags,
    Handler::SkillCards,
    Handler::SkillBars,
    Handler::AboutFlip,
    Handler::Loading,
];

impl Handler {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Nav => "nav",
            Self::SmoothScroll => "smooth-scroll",
            Self::SkillTags => "skill-tags",
            Self::SkillCards => "skill-cards",
            Self::SkillBars => "skill-bars",
            Self::AboutFlip => "about-flip",
            Self::Loading => "loading",
        }
    }
}

/// Config from the optional embedded JSON; falls back to defaults on any error.
#[must_use]
pub fn config_from_markup(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            PageConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
pub use host::{install_all, run_when_ready};

#[cfg(feature = "hydrate")]
mod host {
    use wasm_bindgen::JsValue;
    use web_sys::Document;

    use super::{Handler, SETUP_ORDER, config_from_markup};
    use crate::config::PageConfig;
    use crate::consts::ID_PAGE_CONFIG;
    use crate::error::SetupError;
    use crate::{anchor, dom, flip_card, loading, nav, skill_bars, skills, theme};

    impl Handler {
        fn install(self, config: &PageConfig) -> Result<(), SetupError> {
            match self {
                Self::Theme => theme::install(config),
                Self::Nav => nav::install(config),
                Self::SmoothScroll => anchor::install(),
                Self::SkillTags => skills::install_tags(),
                Self::SkillCards => skills::install_cards(),
                Self::SkillBars => skill_bars::install(config),
                Self::AboutFlip => flip_card::install(config),
                Self::Loading => loading::install(config),
            }
        }
    }

    /// Run every setup routine in order. Returns how many installed.
    pub fn install_all(config: &PageConfig) -> usize {
        let mut installed = 0;
        for handler in SETUP_ORDER {
            match handler.install(config) {
                Ok(()) => installed += 1,
                Err(err) => log::debug!("{}: skipped ({err})", handler.name()),
            }
        }
        log::info!("page interactions ready ({installed}/{} handlers)", SETUP_ORDER.len());
        installed
    }

    fn embedded_config(doc: &Document) -> PageConfig {
        let raw = doc.get_element_by_id(ID_PAGE_CONFIG).and_then(|el| el.text_content());
        config_from_markup(raw.as_deref())
    }

    fn is_loading(doc: &Document) -> bool {
        match js_sys::Reflect::get(doc, &JsValue::from_str("readyState")) {
            Ok(state) => state.as_string().is_some_and(|s| s == "loading"),
            Err(_) => false,
        }
    }

    /// Load config, then install everything now or on `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document, or the ready listener
    /// cannot be attached.
    pub fn run_when_ready() -> Result<(), SetupError> {
        let doc = dom::document()?;
        let config = embedded_config(&doc);
        log::set_max_level(config.log_level().to_level_filter());

        if !is_loading(&doc) {
            install_all(&config);
            return Ok(());
        }
        let mut pending = Some(config);
        dom::listen(&doc, "DOMContentLoaded", move |_ev| {
            if let Some(config) = pending.take() {
                install_all(&config);
            }
        })
    }
}
