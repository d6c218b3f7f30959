//! Draws the lightbulb toolbar icon at a fixed set of sizes and saves each as PNG.

pub mod draw;
pub mod icon_gen;
pub mod lightbulb;

pub use icon_gen::{generate_icons, Args};
pub use lightbulb::{render_lightbulb, Geometry, Palette, ICON_SIZES};
