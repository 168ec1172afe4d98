use crate::{
    body::{Body, Direction, Rect},
    boundary::arena_boundaries,
    buffer::DoubleBuffer,
    collision::step_body,
    render::{draw_bodies, RenderError, RenderSurface},
    world_gen::{random_bodies, GenerationConfig},
};
use log::{debug, info};
use nalgebra::Vector2;
use rayon::prelude::*;
use std::time::{Duration, Instant};

const FRAME_TIME_CAP: Duration = Duration::from_millis(10);

/// Bodies bouncing inside a walled arena.
///
/// Each `update` reads the current buffer and writes every body's next state
/// into the other buffer, so all bodies step simultaneously no matter the
/// order in which the slots are computed.
#[derive(Clone, Debug)]
pub struct Scene {
    width: u32,
    height: u32,
    boundaries: [Body; 4],
    bodies: DoubleBuffer<Body>,
    tick: u64,
}

impl Scene {
    pub fn new(config: &GenerationConfig) -> Scene {
        info!(
            "Generating {} bodies in a {}x{} arena (seed {})",
            config.body_count, config.width, config.height, config.seed
        );
        Scene::from_bodies(random_bodies(config), config.width, config.height)
    }

    pub fn from_bodies(bodies: Vec<Body>, width: u32, height: u32) -> Scene {
        Scene {
            width,
            height,
            boundaries: arena_boundaries(width, height),
            bodies: DoubleBuffer::new(bodies),
            tick: 0,
        }
    }

    /// Two equal squares on a collision course along the same row.
    pub fn head_on(width: u32, height: u32) -> Scene {
        Scene::from_bodies(
            vec![
                Body::new(Rect::new(100, 350, 100, 100), Direction::East.velocity()),
                Body::new(Rect::new(900, 350, 100, 100), Direction::West.velocity()),
            ],
            width,
            height,
        )
    }

    pub fn update(&mut self) {
        let boundaries = &self.boundaries;
        let (current, next) = self.bodies.split();
        let contacts: usize = next
            .par_iter_mut()
            .zip(current.par_iter())
            .map(|(slot, body)| {
                let outcome = step_body(body, current, boundaries);
                *slot = outcome.body;
                outcome.contacts
            })
            .sum();
        self.bodies.swap();
        self.tick += 1;
        debug!("Tick {}: {} contacts", self.tick, contacts);
    }

    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        draw_bodies(surface, &self.boundaries, self.bodies.current())
    }

    pub fn bodies(&self) -> &[Body] {
        self.bodies.current()
    }

    pub fn boundaries(&self) -> &[Body] {
        &self.boundaries
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of completed updates.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies().iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies().iter().map(Body::kinetic_energy).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Minimum wall-clock duration of one frame.
    pub frame_time_cap: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            frame_time_cap: FRAME_TIME_CAP,
        }
    }
}

/// Sleeps away whatever is left of the frame budget.
pub struct FramePacer {
    frame_time_cap: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(config: &SimulationConfig) -> FramePacer {
        FramePacer {
            frame_time_cap: config.frame_time_cap,
            last_frame: Instant::now(),
        }
    }

    /// Returns the time the frame took before any sleeping.
    pub fn wait(&mut self) -> Duration {
        let frame_time = self.last_frame.elapsed();
        debug!("Frame time: {} ms", frame_time.as_millis());
        if frame_time < self.frame_time_cap {
            std::thread::sleep(self.frame_time_cap - frame_time);
        }
        self.last_frame = Instant::now();
        frame_time
    }
}
