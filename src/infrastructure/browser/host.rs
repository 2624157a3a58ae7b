//! Window geometry reads and the window listeners that feed them.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::Event;

use crate::application::HostListener;
use crate::domain::animation::ViewportSize;

pub fn viewport_size() -> ViewportSize {
    let window = gloo::utils::window();
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    ViewportSize::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn device_pixel_ratio() -> f64 {
    gloo::utils::window().device_pixel_ratio()
}

pub fn scroll_offset() -> f64 {
    gloo::utils::window().scroll_y().unwrap_or(0.0)
}

/// Passive `resize` listener on the window, removed on drop.
pub fn on_window_resize(callback: impl FnMut(&Event) + 'static) -> EventListener {
    EventListener::new_with_options(&gloo::utils::window(), "resize", EventListenerOptions::default(), callback)
}

/// Passive `scroll` listener on the window, removed on drop.
pub fn on_window_scroll(callback: impl FnMut(&Event) + 'static) -> EventListener {
    EventListener::new_with_options(&gloo::utils::window(), "scroll", EventListenerOptions::default(), callback)
}

impl HostListener for EventListener {
    fn detach(self: Box<Self>) {
        drop(self);
    }
}
