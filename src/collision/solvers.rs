use crate::body::{Body, Velocity};

/// Velocity of `body` after an elastic collision with `other`.
///
/// Two-dimensional two-body elastic collision along the line of centers:
///
/// `v_a' = v_a - 2 m_b / (m_a + m_b) * <v_a - v_b, x_a - x_b> / |x_a - x_b|^2 * (x_a - x_b)`
///
/// Only `body`'s velocity is returned; call again with the arguments swapped
/// for the other side. The result is not finite when both centers coincide;
/// `step_body` never resolves such a pair.
pub fn elastic_collision_velocity(body: &Body, other: &Body) -> Velocity {
    let dv = body.velocity - other.velocity;
    let dx = body.center - other.center;
    let proj = dv.dot(&dx);
    let d2 = dx.norm_squared();
    let m = 2. * other.mass / (body.mass + other.mass);
    body.velocity - dx * (m * proj / d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Rect;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    #[test]
    fn equal_masses_head_on_swap_velocities() {
        let a = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(3., 0.));
        let b = Body::new(Rect::new(9, 0, 10, 10), Vector2::new(-1., 0.));
        assert_relative_eq!(
            elastic_collision_velocity(&a, &b),
            Vector2::new(-1., 0.),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            elastic_collision_velocity(&b, &a),
            Vector2::new(3., 0.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn still_heavy_wall_reflects() {
        let wall = Body::new(Rect::new(100, -1000, 100_000, 2010), Vector2::zeros());
        let a = Body::new(Rect::new(90, 0, 10, 10), Vector2::new(4., 0.));
        let v = elastic_collision_velocity(&a, &wall);
        assert_relative_eq!(v.x, -4., epsilon = 1e-2);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn conserves_momentum_and_energy() {
        let mut rng = Pcg64::seed_from_u64(0x5eed);
        let mut checked = 0;
        while checked < 1000 {
            let a = Body::new(
                Rect::new(
                    rng.gen_range(-500..500),
                    rng.gen_range(-500..500),
                    rng.gen_range(1..200),
                    rng.gen_range(1..200),
                ),
                Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
            );
            let b = Body::new(
                Rect::new(
                    rng.gen_range(-500..500),
                    rng.gen_range(-500..500),
                    rng.gen_range(1..200),
                    rng.gen_range(1..200),
                ),
                Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
            );
            if (a.center - b.center).norm_squared() < 1e-6 {
                continue;
            }
            let a_after = Body {
                velocity: elastic_collision_velocity(&a, &b),
                ..a
            };
            let b_after = Body {
                velocity: elastic_collision_velocity(&b, &a),
                ..b
            };

            let p_scale = a.momentum().norm() + b.momentum().norm() + 1.;
            let dp = (a.momentum() + b.momentum()) - (a_after.momentum() + b_after.momentum());
            assert!(dp.norm() / p_scale < 1e-9, "momentum drift {:?}", dp);

            let e_before = a.kinetic_energy() + b.kinetic_energy();
            let e_after = a_after.kinetic_energy() + b_after.kinetic_energy();
            assert_relative_eq!(e_before, e_after, epsilon = 1e-9, max_relative = 1e-9);
            checked += 1;
        }
    }
}
