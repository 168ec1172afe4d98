use nalgebra::Vector2;
use std::cmp::{max, min};
use std::fmt;

pub type Velocity = Vector2<f64>;

/// Integer pixel rectangle with the same layout as an SDL rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> i64 {
        self.x as i64
    }

    pub fn top(&self) -> i64 {
        self.y as i64
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// True when the two rectangles share a region of non-zero area.
    /// Rectangles that only touch along an edge do not intersect.
    pub fn has_intersection(&self, other: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || other.w == 0 || other.h == 0 {
            return false;
        }
        let x0 = max(self.left(), other.left());
        let x1 = min(self.right(), other.right());
        let y0 = max(self.top(), other.top());
        let y1 = min(self.bottom(), other.bottom());
        x1 > x0 && y1 > y0
    }
}

/// A moving axis-aligned rectangle.
///
/// The center keeps sub-pixel precision between ticks; everything that needs
/// integer geometry (intersection, equality, drawing) goes through [`Body::rect`].
#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub mass: f64,
    pub center: Vector2<f64>,
    pub width: u32,
    pub height: u32,
    pub velocity: Velocity,
}

impl Body {
    pub fn new(rect: Rect, velocity: Velocity) -> Body {
        // Border rects are huge, so the area is computed in floating point.
        let mass = rect.w as f64 * rect.h as f64;
        Body {
            mass,
            center: Vector2::new(
                rect.x as f64 + rect.w as f64 / 2.,
                rect.y as f64 + rect.h as f64 / 2.,
            ),
            width: rect.w,
            height: rect.h,
            velocity,
        }
    }

    pub fn rect(&self) -> Rect {
        let half_w = self.width as f64 / 2.;
        let half_h = self.height as f64 / 2.;
        Rect {
            x: (self.center.x - half_w) as i32,
            y: (self.center.y - half_h) as i32,
            w: self.width,
            h: self.height,
        }
    }

    pub fn intersects(&self, other: &Body) -> bool {
        self.rect().has_intersection(&other.rect())
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

/// Bodies are identified by their pixel rectangle; velocity and mass are ignored.
impl PartialEq for Body {
    fn eq(&self, other: &Body) -> bool {
        self.rect() == other.rect()
    }
}

impl Eq for Body {}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rect = self.rect();
        write!(
            f,
            "Pos = {{ {}, {} }},\t\tVel = {{ {}, {} }}",
            rect.x, rect.y, self.velocity.x, self.velocity.y
        )
    }
}

/// Unit compass velocities, screen coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Still,
}

impl Direction {
    pub fn velocity(self) -> Velocity {
        let (x, y) = match self {
            Direction::North => (0., -1.),
            Direction::NorthEast => (1., -1.),
            Direction::East => (1., 0.),
            Direction::SouthEast => (1., 1.),
            Direction::South => (0., 1.),
            Direction::SouthWest => (-1., 1.),
            Direction::West => (-1., 0.),
            Direction::NorthWest => (-1., -1.),
            Direction::Still => (0., 0.),
        };
        Vector2::new(x, y)
    }
}
