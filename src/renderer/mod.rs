//! Rendering module
//!
//! `scene` turns state into shapes on every platform; `canvas` paints them
//! in the browser.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{BirdSprite, Overlay, Palette, PipeSprite, Rect, Scene, bird_rotation, build_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
