pub mod collision;
pub mod solvers;
pub use collision::step_body;
pub use collision::StepOutcome;
pub use solvers::elastic_collision_velocity;
