pub mod components;
pub mod mount;
pub mod wasm_api;

pub use components::{AnimatedBackground, ChartPanel};
pub use mount::{BackgroundMount, ChartMount, PlacedTooltip};
