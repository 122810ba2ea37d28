//! Light/dark theme toggle.
//!
//! The starting theme is the stored preference if there is one, else the OS
//! `prefers-color-scheme`. A click flips and persists it. OS scheme changes
//! are followed only until the user has made an explicit choice.
//!
//! The controller returns [`ThemeAction`]s; the host applies them to the
//! `<html>` attribute, the toggle icon, and `localStorage`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeTimings;
use crate::consts::THEME_BLACK_BACKGROUND;

/// Active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored under the `theme` key and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon glyph for the toggle: the theme a click would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{1F31E}",
            Self::Light => "\u{1F319}",
        }
    }
}

/// DOM effect requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// Set `data-theme` on the root element.
    SetRootAttribute(Theme),
    /// Replace the toggle icon text.
    SetIcon(&'static str),
    /// Write the preference to storage.
    Persist(Theme),
    /// Clear the body's inline background color after a delay.
    ScheduleBackgroundReset { delay_ms: u32 },
}

/// Theme state for one page.
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: Theme,
    explicit: bool,
    timings: ThemeTimings,
}

impl ThemeController {
    /// `stored` is the raw storage value; an unrecognized value counts as absent.
    #[must_use]
    pub fn new(stored: Option<&str>, os_prefers_dark: bool, timings: ThemeTimings) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => Self { current: theme, explicit: true, timings },
            None => Self { current: Theme::from_os(os_prefers_dark), explicit: false, timings },
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether a stored or clicked preference pins the theme.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Effects that apply the starting theme.
    #[must_use]
    pub fn initial_actions(&self, body_background: &str) -> Vec<ThemeAction> {
        self.apply(body_background)
    }

    /// Flip the theme and persist the choice.
    pub fn toggle(&mut self, body_background: &str) -> Vec<ThemeAction> {
        self.current = self.current.toggled();
        self.explicit = true;
        log::debug!("theme: toggled to {}", self.current.as_str());
        let mut actions = self.apply(body_background);
        actions.push(ThemeAction::Persist(self.current));
        actions
    }

    /// Follow an OS scheme change unless the user has chosen a theme.
    pub fn on_os_scheme_change(&mut self, prefers_dark: bool, body_background: &str) -> Vec<ThemeAction> {
        if self.explicit {
            return Vec::new();
        }
        self.current = Theme::from_os(prefers_dark);
        self.apply(body_background)
    }

    fn apply(&self, body_background: &str) -> Vec<ThemeAction> {
        let mut actions = vec![
            ThemeAction::SetRootAttribute(self.current),
            ThemeAction::SetIcon(self.current.icon()),
        ];
        if self.current == Theme::Dark && body_background.trim() == THEME_BLACK_BACKGROUND {
            actions.push(ThemeAction::ScheduleBackgroundReset { delay_ms: self.timings.background_reset_ms });
        }
        actions
    }
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, HtmlElement, MediaQueryList};

    use super::{ThemeAction, ThemeController};
    use crate::config::PageConfig;
    use crate::consts::{DARK_SCHEME_QUERY, ID_THEME_TOGGLE, SEL_THEME_ICON, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
    use crate::dom;
    use crate::error::SetupError;
    use crate::storage::{LocalStorage, MemoryStore, PreferenceStore};

    struct ThemeHost {
        root: Element,
        icon: HtmlElement,
        body: Option<HtmlElement>,
        store: RefCell<Box<dyn PreferenceStore>>,
    }

    impl ThemeHost {
        fn body_background(&self) -> String {
            let Some(body) = &self.body else {
                return String::new();
            };
            match body.style().get_property_value("background-color") {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("body background read failed: {err:?}");
                    String::new()
                }
            }
        }

        fn run(&self, actions: Vec<ThemeAction>) {
            for action in actions {
                match action {
                    ThemeAction::SetRootAttribute(theme) => {
                        dom::report(self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()), THEME_ATTRIBUTE);
                    }
                    ThemeAction::SetIcon(glyph) => dom::set_text(&self.icon, glyph),
                    ThemeAction::Persist(theme) => self.store.borrow_mut().set(THEME_STORAGE_KEY, theme.as_str()),
                    ThemeAction::ScheduleBackgroundReset { delay_ms } => {
                        if let Some(body) = self.body.clone() {
                            dom::after(delay_ms, move || dom::clear_style(&body, "background-color"));
                        }
                    }
                }
            }
        }
    }

    /// Wire `#theme-toggle` and the OS scheme listener.
    pub fn install(config: &PageConfig) -> Result<(), SetupError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let toggle = dom::by_id(&doc, ID_THEME_TOGGLE)?;
        let icon = dom::query(&doc, SEL_THEME_ICON)?;
        let root = doc.document_element().ok_or(SetupError::MissingElement("html"))?;

        let store: Box<dyn PreferenceStore> = match LocalStorage::open(&window) {
            Some(storage) => Box::new(storage),
            None => Box::new(MemoryStore::new()),
        };
        let os_query = dom::media_query(&window, DARK_SCHEME_QUERY);
        let prefers_dark = os_query.as_ref().is_some_and(MediaQueryList::matches);
        let stored = store.get(THEME_STORAGE_KEY);
        let controller = Rc::new(RefCell::new(ThemeController::new(stored.as_deref(), prefers_dark, config.theme)));

        let host = Rc::new(ThemeHost { root, icon, body: doc.body(), store: RefCell::new(store) });
        let initial = controller.borrow().initial_actions(&host.body_background());
        host.run(initial);

        {
            let host = Rc::clone(&host);
            let controller = Rc::clone(&controller);
            dom::listen(&toggle, "click", move |_ev| {
                let actions = controller.borrow_mut().toggle(&host.body_background());
                host.run(actions);
            })?;
        }

        if let Some(list) = os_query {
            let list_for_cb = list.clone();
            dom::listen(&list, "change", move |_ev| {
                let actions = controller
                    .borrow_mut()
                    .on_os_scheme_change(list_for_cb.matches(), &host.body_background());
                host.run(actions);
            })?;
        }

        log::debug!("theme: installed");
        Ok(())
    }
}
