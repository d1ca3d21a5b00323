use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::navigation::Section;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn scroll_to_top() -> Result<(), DomError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

/// Smooth-scrolls the element with `id` into view.
///
/// Returns `Ok(false)` when nothing on the page carries that id.
pub fn scroll_to_section(id: &str) -> Result<bool, DomError> {
    let Some(element) = document()?.get_element_by_id(id) else {
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Scrolls to `section`, logging instead of failing.
pub fn reveal(section: Section) {
    match scroll_to_section(section.id()) {
        Ok(true) => debug!("Scrolled to #{}", section.id()),
        Ok(false) => debug!("No element #{} to scroll to", section.id()),
        Err(e) => warn!("Could not scroll to #{}: {}", section.id(), e),
    }
}

/// Keeps the page behind an overlay from scrolling for as long as it lives.
///
/// The body's previous `overflow` value is put back on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, DomError> {
        let body = body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow")?;
        style.set_property("overflow", "hidden")?;
        debug!("Background scroll locked");
        Ok(ScrollLock { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        match restored {
            Ok(()) => debug!("Background scroll released"),
            Err(e) => warn!("Failed to release scroll lock: {:?}", e),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn body_overflow() -> String {
        body().unwrap().style().get_property_value("overflow").unwrap()
    }

    #[wasm_bindgen_test]
    fn lock_restores_unset_overflow() {
        body().unwrap().style().remove_property("overflow").unwrap();
        {
            let _lock = ScrollLock::acquire().unwrap();
            assert_eq!(body_overflow(), "hidden");
        }
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn lock_restores_previous_overflow() {
        body().unwrap().style().set_property("overflow", "auto").unwrap();
        let lock = ScrollLock::acquire().unwrap();
        assert_eq!(body_overflow(), "hidden");
        drop(lock);
        assert_eq!(body_overflow(), "auto");
        body().unwrap().style().remove_property("overflow").unwrap();
    }

    #[wasm_bindgen_test]
    fn missing_section_is_not_an_error() {
        assert!(!scroll_to_section("no-such-section").unwrap());
    }

    #[wasm_bindgen_test]
    fn existing_section_is_scrolled_to() {
        let doc = document().unwrap();
        let el = doc.create_element("section").unwrap();
        el.set_id("planos");
        body().unwrap().append_child(&el).unwrap();
        assert!(scroll_to_section(Section::Plans.id()).unwrap());
        el.remove();
    }
}
