pub mod renderer;
pub mod svg;

pub use renderer::{Scene, render_scene};
pub use svg::SvgCanvas;
