use crate::{body::Body, body::Rect, simulation::Scene};
use thiserror::Error;

#[cfg(feature = "sdl")]
pub mod sdl;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

pub const BACKGROUND_COLOR: Color = Color::rgba(255, 255, 255, 0);
pub const BOUNDARY_COLOR: Color = Color::rgba(255, 0, 0, 0);
pub const BODY_COLOR: Color = Color::rgba(0, 0, 0, 0);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SDL_RenderFillRect: {0}")]
    FillRect(String),
}

/// The drawing primitives the simulation needs from a graphics backend.
pub trait RenderSurface {
    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError>;
    fn present(&mut self);
}

/// Paints the boundaries, then the bodies, each group in its own color.
pub fn draw_bodies<S: RenderSurface + ?Sized>(
    surface: &mut S,
    boundaries: &[Body],
    bodies: &[Body],
) -> Result<(), RenderError> {
    surface.set_draw_color(BOUNDARY_COLOR);
    for boundary in boundaries {
        surface.fill_rect(boundary.rect())?;
    }

    surface.set_draw_color(BODY_COLOR);
    for body in bodies {
        surface.fill_rect(body.rect())?;
    }
    Ok(())
}

/// Clears the surface, draws the scene and presents the frame.
pub fn present_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    scene: &Scene,
) -> Result<(), RenderError> {
    surface.set_draw_color(BACKGROUND_COLOR);
    surface.clear();
    scene.render(surface)?;
    surface.present();
    Ok(())
}
