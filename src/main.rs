//! Landing Page Frontend Entry Point
//!
//! Wires behavior onto the static markup in `index.html`.

mod config;
mod error;
mod dom;
mod storage;
mod theme;
mod progress;
mod nav;
mod clipboard;
mod counters;
mod projects;
mod contact;
mod controller;

use controller::PageController;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = PageController::mount() {
        web_sys::console::error_1(&format!("[PAGE] Controller not started: {}", err).into());
    }
}
