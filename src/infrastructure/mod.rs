//! Browser adapters for the domain seams: canvas and SVG output,
//! `requestAnimationFrame`, IntersectionObserver and console logging.

pub mod browser;
pub mod rendering;
pub mod services;
