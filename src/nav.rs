//! Mobile Navigation
//!
//! The toggle button flips the menu; picking any link always closes it.

use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::config::NAV_OPEN_CLASS;
use crate::dom::listen;
use crate::error::PageError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

fn render(state: NavState, links: &Element, toggle: &HtmlElement) {
    let _ = links.class_list().toggle_with_force(NAV_OPEN_CLASS, state.is_open());
    let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
}

pub fn bind(toggle: HtmlElement, links: Element, link_items: Vec<Element>) -> Result<(), PageError> {
    let initial = NavState {
        open: links.class_list().contains(NAV_OPEN_CLASS),
    };
    let state = StoredValue::new(initial);

    {
        let links = links.clone();
        let button = toggle.clone();
        listen(&toggle, "click", move |_| {
            state.update_value(|nav| {
                nav.toggle();
            });
            render(state.get_value(), &links, &button);
        })?;
    }

    for item in link_items {
        let links = links.clone();
        let button = toggle.clone();
        listen(&item, "click", move |_| {
            state.update_value(NavState::close);
            render(state.get_value(), &links, &button);
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_aria_follows() {
        let mut nav = NavState::default();
        assert_eq!(nav.aria_expanded(), "false");

        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");

        assert!(!nav.toggle());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_close_from_open() {
        let mut nav = NavState::default();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut nav = NavState::default();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
        assert_eq!(nav.aria_expanded(), "false");
    }
}
