//! Scroll Progress Indicator

use web_sys::{Document, HtmlElement};

use crate::dom::listen_passive;
use crate::error::PageError;

/// Percentage of the page scrolled, 0 when the page cannot scroll
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let height = scroll_height - client_height;
    if height > 0.0 {
        scroll_top / height * 100.0
    } else {
        0.0
    }
}

fn update(doc: &Document, bar: &HtmlElement) {
    let Some(root) = doc.document_element() else { return };
    let mut scroll_top = root.scroll_top();
    if scroll_top == 0 {
        scroll_top = doc.body().map(|body| body.scroll_top()).unwrap_or(0);
    }

    let percent = scroll_percent(
        f64::from(scroll_top),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    let _ = bar.style().set_property("width", &format!("{}%", percent));
}

/// Track window scrolling and paint the bar once right away
pub fn bind(doc: Document, bar: HtmlElement) -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoDocument)?;
    update(&doc, &bar);
    listen_passive(&window, "scroll", move |_| update(&doc, &bar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_scrollable_is_zero() {
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percent(120.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percent(50.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(scroll_percent(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_percent(1200.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(scroll_percent(600.0, 2000.0, 800.0), 50.0);
    }
}
