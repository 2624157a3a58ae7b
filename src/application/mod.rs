pub mod animation_engine;
pub mod chart_controller;
pub mod frame_loop;

pub use animation_engine::{AnimationEngine, HostListener};
pub use chart_controller::InteractiveChart;
pub use frame_loop::{FrameLoop, LoopControl};
