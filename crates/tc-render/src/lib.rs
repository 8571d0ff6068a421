pub mod font;
pub mod hit;
pub mod layout;

pub use hit::hit_test;
pub use layout::{ApproxMeasure, LayoutParams, LineLayout, TextBlock, TextMeasure, layout_elements};
