pub mod canvas_surface;
pub mod svg_writer;

pub use canvas_surface::CanvasSurface;
pub use svg_writer::{path_d, render_svg};
