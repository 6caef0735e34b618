pub mod images;
pub mod render;

pub use images::{prepare_images, ImageBlob, ImageRenderer, ItermRenderer, RenderOptions};
pub use render::{emphasize, render_lines, title_line, Emphasis};
