use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::domain::errors::{MotionError, SurfaceResult};
use crate::domain::logging::LogComponent;
use crate::log_trace;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reports the intersection ratio of one element. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    /// Observe `target`, calling `on_ratio` each time its ratio crosses
    /// `threshold` (or 0).
    pub fn observe(target: &Element, threshold: f64, mut on_ratio: impl FnMut(f64) + 'static) -> SurfaceResult<Self> {
        let callback: EntriesCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let ratio = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                log_trace!(LogComponent::Infrastructure("VisibilityObserver"), "ratio {ratio:.2}");
                on_ratio(ratio);
            }
        });

        let thresholds = Array::of2(&0.0.into(), &threshold.clamp(0.0, 1.0).into());
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| MotionError::Browser(format!("IntersectionObserver: {err:?}")))?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
