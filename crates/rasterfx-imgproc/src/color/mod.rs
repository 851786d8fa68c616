mod gray;
mod preserve;

pub use gray::{grayscale, luma};
pub use preserve::{preserve_color, preserve_color_into, ColorTolerance};
