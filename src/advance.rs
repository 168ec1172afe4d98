use crate::body::Body;

/// Returns a copy of `body` displaced by one tick of its own velocity.
pub fn advance(body: &Body) -> Body {
    Body {
        center: body.center + body.velocity,
        ..*body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Rect;
    use nalgebra::Vector2;

    #[test]
    fn advance_moves_center_by_velocity() {
        let body = Body::new(Rect::new(10, 20, 30, 40), Vector2::new(1.5, -2.25));
        let moved = advance(&body);
        assert_eq!(moved.center, body.center + Vector2::new(1.5, -2.25));
        assert_eq!(moved.velocity, body.velocity);
        assert_eq!(moved.mass, body.mass);
        assert_eq!((moved.width, moved.height), (body.width, body.height));
    }

    #[test]
    fn advance_returns_a_copy() {
        let body = Body::new(Rect::new(0, 0, 10, 10), Vector2::new(5., 5.));
        let _ = advance(&body);
        assert_eq!(body.center, Vector2::new(5., 5.));
    }
}
