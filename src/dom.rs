//! Browser glue shared by the handler hosts.
//!
//! Element lookups return [`SetupError`] so a routine can bail out with `?`
//! when markup is missing. Writes whose failure does not matter to the page
//! go through [`report`] and are logged at debug level.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MediaQueryList, Window};

use crate::error::SetupError;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

/// Milliseconds since the epoch, from the JS clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Log a failed browser write instead of dropping it.
pub fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

fn cast_html<T: JsCast>(value: T) -> Option<HtmlElement> {
    match value.dyn_into::<HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => None,
    }
}

fn as_html(element: Element, name: &'static str) -> Result<HtmlElement, SetupError> {
    cast_html(element).ok_or(SetupError::MissingElement(name))
}

/// Element by id, required.
pub fn by_id(doc: &Document, id: &'static str) -> Result<HtmlElement, SetupError> {
    let element = doc.get_element_by_id(id).ok_or(SetupError::MissingElement(id))?;
    as_html(element, id)
}

/// First match for `selector` in the document, required.
pub fn query(doc: &Document, selector: &'static str) -> Result<HtmlElement, SetupError> {
    let element = doc.query_selector(selector)?.ok_or(SetupError::MissingElement(selector))?;
    as_html(element, selector)
}

/// First match for `selector` under `root`, if any.
pub fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    match root.query_selector(selector) {
        Ok(Some(element)) => cast_html(element),
        Ok(None) => None,
        Err(err) => {
            log::debug!("query {selector} failed: {err:?}");
            None
        }
    }
}

/// Every HTML element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("query {selector} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast_html)
        .collect()
}

/// Every HTML element matching `selector` under `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("query {selector} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast_html)
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`], flagged passive so scrolling is never blocked.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, f).forget();
}

/// Run `tick` every `period_ms` until it returns `false`.
pub fn repeat_while<F>(period_ms: u32, mut tick: F)
where
    F: FnMut() -> bool + 'static,
{
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let interval = Interval::new(period_ms, move || {
        if tick() {
            return;
        }
        let taken = slot_for_cb.borrow_mut().take();
        if let Some(interval) = taken {
            // Still inside this closure: free it on the next turn.
            let closure = interval.cancel();
            Timeout::new(0, move || drop(closure)).forget();
        }
    });
    *slot.borrow_mut() = Some(interval);
}

/// Run `f` on the next animation frame, or right away if frames are unavailable.
pub fn on_next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let slot = Rc::new(RefCell::new(Some(f)));
    let slot_for_cb = Rc::clone(&slot);
    let cb = Closure::once_into_js(move |_ts: f64| {
        let taken = slot_for_cb.borrow_mut().take();
        if let Some(f) = taken {
            f();
        }
    });
    let scheduled = match web_sys::window() {
        Some(window) => window.request_animation_frame(cb.unchecked_ref()).is_ok(),
        None => false,
    };
    if !scheduled {
        let taken = slot.borrow_mut().take();
        if let Some(f) = taken {
            f();
        }
    }
}

pub fn media_query(window: &Window, query: &str) -> Option<MediaQueryList> {
    match window.match_media(query) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("matchMedia {query} failed: {err:?}");
            None
        }
    }
}

/// Current vertical scroll offset.
pub fn scroll_y(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::debug!("scrollY failed: {err:?}");
            0.0
        }
    }
}

/// `window.innerHeight`, or 0 when unavailable.
pub fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("innerHeight failed: {err:?}");
            0.0
        }
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    report(element.style().set_property(property, value), property);
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    report(element.style().remove_property(property), property);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    report(element.class_list().toggle_with_force(class, on), class);
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn focus(element: &HtmlElement) {
    report(element.focus(), "focus");
}
