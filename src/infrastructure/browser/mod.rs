pub mod host;
pub mod raf_scheduler;
pub mod visibility_observer;

pub use host::{device_pixel_ratio, on_window_resize, on_window_scroll, scroll_offset, viewport_size};
pub use raf_scheduler::RafScheduler;
pub use visibility_observer::VisibilityObserver;
