use super::solvers::elastic_collision_velocity;
use crate::{advance::advance, body::Body};
use log::trace;

#[derive(Clone, Copy, Debug)]
pub struct StepOutcome {
    pub body: Body,
    /// Number of bodies and boundaries the one-step projection ran into.
    pub contacts: usize,
}

/// Advances `body` by one tick against a frozen view of the world.
///
/// The body is projected one step ahead and tested against every other body
/// in `bodies` and every boundary. On a hit its velocity is replaced with the
/// elastic response to that partner, the last hit wins. The body is then moved
/// by the resulting velocity.
///
/// `bodies` may contain `body` itself; entries with the same pixel rectangle
/// are skipped, which also skips distinct bodies that happen to coincide.
/// Partners sharing the exact center are skipped too, the elastic response
/// has no line of centers for them.
pub fn step_body(body: &Body, bodies: &[Body], boundaries: &[Body]) -> StepOutcome {
    let one_step = advance(body);
    let mut next = *body;
    let mut contacts = 0;

    // Find collision with other bodies.
    for other in bodies.iter().filter(|&other| other != body) {
        if one_step.intersects(other) && separated(body, other) {
            next.velocity = elastic_collision_velocity(body, other);
            contacts += 1;
        }
    }
    // Find collision with border.
    for boundary in boundaries {
        if one_step.intersects(boundary) && separated(body, boundary) {
            next.velocity = elastic_collision_velocity(body, boundary);
            contacts += 1;
        }
    }
    trace!("{}", body);

    StepOutcome {
        body: advance(&next),
        contacts,
    }
}

fn separated(body: &Body, other: &Body) -> bool {
    (body.center - other.center).norm_squared() > 0.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Rect;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn free_body_just_moves() {
        let body = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(1., 2.));
        let far = Body::new(Rect::new(100, 100, 10, 10), Vector2::zeros());
        let outcome = step_body(&body, &[body, far], &[]);
        assert_eq!(outcome.contacts, 0);
        assert_eq!(outcome.body.center, Vector2::new(6., 7.));
        assert_eq!(outcome.body.velocity, body.velocity);
    }

    #[test]
    fn moves_with_resolved_velocity() {
        let body = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(2., 0.));
        let other = Body::new(Rect::new(11, 0, 10, 10), Vector2::new(-2., 0.));
        let outcome = step_body(&body, &[body, other], &[]);
        assert_eq!(outcome.contacts, 1);
        assert_relative_eq!(outcome.body.velocity, Vector2::new(-2., 0.), epsilon = 1e-12);
        assert_relative_eq!(outcome.body.center, Vector2::new(3., 5.), epsilon = 1e-12);
    }

    #[test]
    fn boundary_wins_over_body() {
        let body = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(-2., 0.));
        let other = Body::new(Rect::new(0, 9, 10, 10), Vector2::zeros());
        let wall = Body::new(Rect::new(-1000, -1495, 1000, 3000), Vector2::zeros());
        let outcome = step_body(&body, &[body, other], &[wall]);
        assert_eq!(outcome.contacts, 2);
        assert_relative_eq!(outcome.body.velocity, Vector2::new(2., 0.), epsilon = 1e-3);
    }

    #[test]
    fn coincident_rects_are_skipped() {
        let body = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(1., 0.));
        let twin = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(-1., 0.));
        let outcome = step_body(&body, &[body, twin], &[]);
        assert_eq!(outcome.contacts, 0);
        assert_eq!(outcome.body.velocity, body.velocity);
    }

    #[test]
    fn concentric_bodies_are_skipped() {
        let small = Body::new(Rect::new(100, 100, 20, 20), Vector2::new(1., 0.));
        let large = Body::new(Rect::new(95, 95, 30, 30), Vector2::new(-1., 0.));
        assert_ne!(small, large);
        assert_eq!(small.center, large.center);

        let outcome = step_body(&small, &[small, large], &[]);
        assert_eq!(outcome.contacts, 0);
        assert_eq!(outcome.body.velocity, small.velocity);
        assert_eq!(outcome.body.center, Vector2::new(111., 110.));
    }
}
