use super::{Color, RenderError, RenderSurface};
use crate::body::Rect;
use crate::world_gen::{WINDOW_HEIGHT, WINDOW_WIDTH};
use sdl2::{
    event::Event,
    keyboard::Keycode,
    pixels,
    render::Canvas,
    video::{Window, WindowBuildError},
    EventPump, IntegerOrSdlError, Sdl,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("SDL_Init: {0}")]
    Init(String),
    #[error("SDL video subsystem: {0}")]
    Video(String),
    #[error("SDL_CreateWindow: {0}")]
    Window(#[from] WindowBuildError),
    #[error("SDL_CreateRenderer: {0}")]
    Renderer(#[from] IntegerOrSdlError),
    #[error("SDL event pump: {0}")]
    EventPump(String),
}

#[derive(Clone, Copy, Debug)]
pub struct DisplayConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Rects",
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

// Fields drop in declaration order: the renderer and its window go before
// the SDL context that created them.
pub struct Graphics {
    pub canvas: Canvas<Window>,
    event_pump: EventPump,
    _sdl_context: Sdl,
}

pub fn init_graphics(display_config: &DisplayConfig) -> Result<Graphics, DisplayError> {
    let sdl_context = sdl2::init().map_err(DisplayError::Init)?;
    let video_subsystem = sdl_context.video().map_err(DisplayError::Video)?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .resizable()
        .build()?;
    let canvas = window.into_canvas().accelerated().build()?;
    let event_pump = sdl_context.event_pump().map_err(DisplayError::EventPump)?;

    Ok(Graphics {
        canvas,
        event_pump,
        _sdl_context: sdl_context,
    })
}

impl Graphics {
    /// Drains pending events; true once the window was closed or Escape pressed.
    pub fn quit_requested(&mut self) -> bool {
        let mut quit = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => quit = true,
                _ => {}
            }
        }
        quit
    }
}

impl RenderSurface for Canvas<Window> {
    fn set_draw_color(&mut self, color: Color) {
        Canvas::set_draw_color(self, pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }

    fn clear(&mut self) {
        Canvas::clear(self);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), RenderError> {
        Canvas::fill_rect(self, sdl2::rect::Rect::new(rect.x, rect.y, rect.w, rect.h))
            .map_err(RenderError::FillRect)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}
