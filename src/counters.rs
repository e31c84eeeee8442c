//! Animated Counters
//!
//! Each `[data-counter]` element counts up from 0 to its target the first
//! time at least 40% of it is visible. Every counter runs its own
//! animation-frame chain and is unobserved once its animation ends.

use js_sys::Array;
use leptos::prelude::request_animation_frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{COUNTER_ATTRIBUTE, COUNTER_DURATION_MS, COUNTER_VISIBILITY_THRESHOLD};
use crate::dom::set_text;
use crate::error::PageError;

/// Linear 0 → target interpolation over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    /// Target from the `data-counter` attribute; missing or non-numeric is 0.
    /// Plain decimal only: JS-style forms such as `0x10` or `0b1` also read as 0.
    pub fn parse_target(value: Option<&str>) -> f64 {
        value
            .map(str::trim)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Fraction of the animation done, clamped to [0, 1]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        (self.target * self.progress(elapsed_ms)).floor() as i64
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Remembers which counters already started so none animates twice
pub struct CounterBoard<K> {
    started: Vec<K>,
}

impl<K: PartialEq> CounterBoard<K> {
    pub fn new() -> Self {
        Self { started: Vec::new() }
    }

    /// True only the first time `key` is seen
    pub fn start(&mut self, key: K) -> bool {
        if self.started.contains(&key) {
            return false;
        }
        self.started.push(key);
        true
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn run_frames(el: Element, animation: CounterAnimation, started_at: f64, observer: IntersectionObserver) {
    request_animation_frame(move || {
        let elapsed = now_ms() - started_at;
        set_text(&el, &animation.value_at(elapsed).to_string());

        if animation.is_finished(elapsed) {
            observer.unobserve(&el);
        } else {
            run_frames(el, animation, started_at, observer);
        }
    });
}

pub fn bind(counters: Vec<Element>) -> Result<(), PageError> {
    let mut board = CounterBoard::new();

    let on_visible = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if !entry.is_intersecting() {
                    continue;
                }

                let el = entry.target();
                if !board.start(el.clone()) {
                    continue;
                }

                let target = CounterAnimation::parse_target(el.get_attribute(COUNTER_ATTRIBUTE).as_deref());
                web_sys::console::log_1(&format!("[COUNTER] Animating to {}", target).into());
                let animation = CounterAnimation::new(target, COUNTER_DURATION_MS);
                run_frames(el, animation, now_ms(), observer.clone());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(COUNTER_VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)?;
    on_visible.forget();

    for counter in &counters {
        observer.observe(counter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_exactly_on_target() {
        let animation = CounterAnimation::new(100.0, 800.0);
        assert_eq!(animation.value_at(800.0), 100);
        assert_eq!(animation.value_at(1250.0), 100);
        assert!(animation.is_finished(800.0));
    }

    #[test]
    fn test_interpolates_with_floor() {
        let animation = CounterAnimation::new(100.0, 800.0);
        assert_eq!(animation.value_at(0.0), 0);
        assert_eq!(animation.value_at(400.0), 50);
        assert_eq!(animation.value_at(7.0), 0);
        assert_eq!(animation.value_at(799.0), 99);
        assert!(!animation.is_finished(799.0));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(CounterAnimation::parse_target(Some("42")), 42.0);
        assert_eq!(CounterAnimation::parse_target(Some(" 7 ")), 7.0);
        assert_eq!(CounterAnimation::parse_target(Some("")), 0.0);
        assert_eq!(CounterAnimation::parse_target(Some("lots")), 0.0);
        assert_eq!(CounterAnimation::parse_target(None), 0.0);
        assert_eq!(CounterAnimation::parse_target(Some("0x10")), 0.0);
        assert_eq!(CounterAnimation::parse_target(Some("Infinity")), 0.0);
    }

    #[test]
    fn test_counter_starts_once() {
        let mut board = CounterBoard::new();
        assert!(board.start("years"));
        assert!(board.start("projects"));
        assert!(!board.start("years"));
        assert!(!board.start("years"));
    }
}
