//! DOM Helpers
//!
//! Element lookups and listener binding used by every page feature.
//! Listeners live as long as the page, so their closures are leaked
//! after registration.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList};

use crate::error::PageError;

pub fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(PageError::NoDocument)
}

/// First match for `selector`, cast to `T`. Absence is a markup error.
pub fn required<T: JsCast>(doc: &Document, selector: &str) -> Result<T, PageError> {
    let element = doc
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement {
            selector: selector.to_string(),
        })?;

    element
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            selector: selector.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

/// All matches for `selector` in the document
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(collect_elements(&doc.query_selector_all(selector)?))
}

/// All matches for `selector` below `root`
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(collect_elements(&root.query_selector_all(selector)?))
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register `handler` for `event` on `target` for the page lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`], registered as a passive listener
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Text content, empty when the node has none
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}
