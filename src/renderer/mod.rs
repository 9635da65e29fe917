//! Canvas 2D rendering module
//!
//! Presentation only: gradients, circles and bars drawn from session state.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use palette::shade_color;
