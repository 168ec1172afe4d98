//! Axis-aligned rectangles bouncing elastically off each other and the arena walls.
//!
//! - [`body`]: the rectangle value type and its geometry.
//! - [`collision`]: the one-tick look-ahead step and the elastic response.
//! - [`simulation`]: the double-buffered [`simulation::Scene`] that drives a tick.
//! - [`render`]: the drawing surface abstraction, with an SDL2 backend behind the `sdl` feature.

pub mod advance;
pub mod body;
pub mod boundary;
pub mod buffer;
pub mod collision;
pub mod render;
pub mod simulation;
pub mod world_gen;

pub use body::{Body, Rect, Velocity};
pub use simulation::Scene;
