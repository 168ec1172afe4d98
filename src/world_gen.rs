use crate::body::{Body, Rect};
use log::debug;
use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::time::{SystemTime, UNIX_EPOCH};

pub const WINDOW_WIDTH: u32 = 1100;
pub const WINDOW_HEIGHT: u32 = 800;
pub const BODY_COUNT: usize = 30;
pub const MIN_BODY_SIZE: u32 = 10;
pub const MAX_BODY_SIZE: u32 = 100;
pub const MAX_SPEED: i32 = 5;
pub const SPAWN_MARGIN: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    pub width: u32,
    pub height: u32,
    pub body_count: usize,
    pub min_size: u32,
    pub max_size: u32,
    pub max_speed: i32,
    /// Distance kept free at the right and bottom edges when picking positions.
    pub margin: u32,
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        GenerationConfig {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            body_count: BODY_COUNT,
            min_size: MIN_BODY_SIZE,
            max_size: MAX_BODY_SIZE,
            max_speed: MAX_SPEED,
            margin: SPAWN_MARGIN,
            seed,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(self, seed: u64) -> GenerationConfig {
        GenerationConfig { seed, ..self }
    }
}

/// Places `config.body_count` bodies at random, rejecting any candidate that
/// overlaps an already placed body.
///
/// Does not terminate if the arena cannot hold that many bodies.
pub fn random_bodies(config: &GenerationConfig) -> Vec<Body> {
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let max_x = config.width.saturating_sub(config.margin) as i32;
    let max_y = config.height.saturating_sub(config.margin) as i32;
    let mut bodies = Vec::<Body>::with_capacity(config.body_count);
    let mut rejected = 0usize;

    while bodies.len() < config.body_count {
        let rect = Rect::new(
            rng.gen_range(0..=max_x),
            rng.gen_range(0..=max_y),
            rng.gen_range(config.min_size..=config.max_size),
            rng.gen_range(config.min_size..=config.max_size),
        );
        let velocity = Vector2::new(
            rng.gen_range(-config.max_speed..=config.max_speed) as f64,
            rng.gen_range(-config.max_speed..=config.max_speed) as f64,
        );
        let body = Body::new(rect, velocity);

        // Check it doesn't overlap with an existing body.
        if bodies.iter().any(|other| other.intersects(&body)) {
            rejected += 1;
            continue;
        }
        bodies.push(body);
    }
    debug!(
        "Placed {} bodies, rejected {} overlapping candidates",
        bodies.len(),
        rejected
    );
    bodies
}
