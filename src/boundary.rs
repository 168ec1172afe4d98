use crate::body::{Body, Rect};
use nalgebra::Vector2;

/// How far each border extends beyond the arena, in pixels.
pub const BORDER_EXTENT: i32 = 2 << 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Upper,
    Right,
    Lower,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Upper, Side::Right, Side::Lower];

    /// Border rectangle sitting flush against this side of a `width` x `height` arena.
    ///
    /// Every border is `2 * BORDER_EXTENT + width` wide and
    /// `2 * BORDER_EXTENT + height` tall, so it also covers the corners.
    pub fn rect(self, width: u32, height: u32) -> Rect {
        let span_w = 2 * BORDER_EXTENT + width as i32;
        let span_h = 2 * BORDER_EXTENT + height as i32;
        let (x, y) = match self {
            Side::Left => (-span_w, -BORDER_EXTENT),
            Side::Upper => (-BORDER_EXTENT, -span_h),
            Side::Right => (width as i32, -BORDER_EXTENT),
            Side::Lower => (-BORDER_EXTENT, height as i32),
        };
        Rect::new(x, y, span_w as u32, span_h as u32)
    }
}

/// The four static walls around the arena, in `Side::ALL` order.
pub fn arena_boundaries(width: u32, height: u32) -> [Body; 4] {
    let wall = |side: Side| Body::new(side.rect(width, height), Vector2::zeros());
    [
        wall(Side::Left),
        wall(Side::Upper),
        wall(Side::Right),
        wall(Side::Lower),
    ]
}
