//! Theme - Colors and Visual Styles

pub mod colors;
pub mod style;

pub use colors::{PageColors, Rgb, rgb};
pub use style::VisualStyle;
