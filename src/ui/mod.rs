pub mod anchor;
pub mod braille;
pub mod render;

pub use anchor::{anchored_rect, Anchor};
pub use render::render;
