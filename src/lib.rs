pub mod draw;
pub mod geometry;
pub mod render;

pub use render::{generate_icon, render, save_png, ICON_PATH, ICON_SIZE};
