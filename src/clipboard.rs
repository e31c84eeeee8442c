//! Copy Email to Clipboard
//!
//! Writes the email text through the async Clipboard API and shows a
//! hint that clears itself after a fixed delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::config::{COPY_FALLBACK_HINT, COPY_HINT_CLEAR_MS, COPY_OK_HINT};
use crate::dom::{listen, set_text, text_of};
use crate::error::PageError;

#[wasm_bindgen]
extern "C" {
    // Throws when `navigator.clipboard` is missing (insecure context), which
    // `catch` turns into an Err just like a rejected promise.
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Any failure: permission, missing API, no user gesture
    Fallback,
}

impl CopyOutcome {
    pub fn hint(self) -> &'static str {
        match self {
            CopyOutcome::Copied => COPY_OK_HINT,
            CopyOutcome::Fallback => COPY_FALLBACK_HINT,
        }
    }
}

pub async fn copy_text(text: &str) -> CopyOutcome {
    match write_text(text).await {
        Ok(_) => CopyOutcome::Copied,
        Err(err) => {
            web_sys::console::warn_1(&format!("[COPY] Clipboard write failed: {:?}", err).into());
            CopyOutcome::Fallback
        }
    }
}

/// Holds the pending hint-clear timer. Replacing it drops the previous
/// timer, which cancels it, so the latest click always gets the full delay.
pub struct HintSlot<T> {
    pending: Option<T>,
}

impl<T> Default for HintSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> HintSlot<T> {
    pub fn replace(&mut self, timer: T) -> Option<T> {
        self.pending.replace(timer)
    }
}

pub fn bind(button: &HtmlElement, email: Element, hint: Element) -> Result<(), PageError> {
    let slot = StoredValue::new_local(HintSlot::<Timeout>::default());

    listen(button, "click", move |_| {
        let address = text_of(&email).trim().to_string();
        let hint = hint.clone();
        spawn_local(async move {
            let outcome = copy_text(&address).await;
            set_text(&hint, outcome.hint());

            let target = hint.clone();
            let clear = Timeout::new(COPY_HINT_CLEAR_MS, move || set_text(&target, ""));
            slot.update_value(|slot| {
                slot.replace(clear);
            });
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_outcome_hints() {
        assert_eq!(CopyOutcome::Copied.hint(), "Email nusxalandi.");
        assert_eq!(CopyOutcome::Fallback.hint(), COPY_FALLBACK_HINT);
        assert_ne!(CopyOutcome::Copied.hint(), CopyOutcome::Fallback.hint());
    }

    #[test]
    fn test_new_timer_drops_previous() {
        let first_dropped = Rc::new(Cell::new(false));
        let second_dropped = Rc::new(Cell::new(false));
        let mut slot = HintSlot::default();

        assert!(slot.replace(DropFlag(first_dropped.clone())).is_none());
        drop(slot.replace(DropFlag(second_dropped.clone())));

        assert!(first_dropped.get());
        assert!(!second_dropped.get());
    }
}
