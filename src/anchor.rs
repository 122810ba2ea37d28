//! Smooth scrolling for same-page hash links.
//!
//! Clicks on `a[href^="#"]` (except a bare `#`) scroll smoothly to the target,
//! leaving room for the fixed nav bar. The nav height is read at click time
//! since the bar changes size when it switches to its scrolled style.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// The selector to scroll to for `href`, or `None` for links this handler leaves alone.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}

/// Document scroll position that puts the target just below the nav bar.
///
/// `target_top` is the target's viewport-relative top, `page_offset_y` the
/// current scroll offset.
#[must_use]
pub fn scroll_top(target_top: f64, page_offset_y: f64, nav_height: f64) -> f64 {
    (target_top + page_offset_y - nav_height).max(0.0)
}

#[cfg(feature = "hydrate")]
pub use host::install;

#[cfg(feature = "hydrate")]
mod host {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

    use super::{anchor_selector, scroll_top};
    use crate::consts::{ID_MAIN_NAV, SEL_HASH_LINKS};
    use crate::dom;
    use crate::error::SetupError;

    fn nav_height(doc: &Document) -> f64 {
        match doc.get_element_by_id(ID_MAIN_NAV) {
            Some(nav) => match nav.dyn_ref::<web_sys::HtmlElement>() {
                Some(html) => f64::from(html.offset_height()),
                None => 0.0,
            },
            None => 0.0,
        }
    }

    fn scroll_to_target(window: &Window, doc: &Document, target: &Element) {
        let top = scroll_top(target.get_bounding_client_rect().top(), dom::scroll_y(window), nav_height(doc));
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    /// Intercept every same-page hash link.
    pub fn install() -> Result<(), SetupError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        let mut wired = 0_usize;

        for link in dom::query_all(&doc, SEL_HASH_LINKS) {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            if anchor_selector(&href).is_none() {
                continue;
            }
            let window = window.clone();
            let doc = doc.clone();
            let link_for_cb = link.clone();
            dom::listen(&link, "click", move |ev| {
                ev.prevent_default();
                let Some(href) = link_for_cb.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_selector(&href) else {
                    return;
                };
                match doc.query_selector(selector) {
                    Ok(Some(target)) => scroll_to_target(&window, &doc, &target),
                    Ok(None) => log::debug!("anchor: no target for {selector}"),
                    Err(err) => log::debug!("anchor: bad selector {selector}: {err:?}"),
                }
            })?;
            wired += 1;
        }

        log::debug!("anchor: {wired} links installed");
        Ok(())
    }
}
