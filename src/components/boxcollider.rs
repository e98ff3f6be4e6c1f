use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned collider placed relative to the entity pivot.
///
/// Disabled colliders are skipped by collision detection and by the solid
/// resolver; collected pickables use this to vanish until they respawn.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    /// Top-left corner relative to the pivot.
    pub offset: Vector2,
    pub enabled: bool,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
            enabled: true,
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Collider whose bottom edge is centred on the pivot.
    pub fn feet(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height))
    }

    /// Collider centred on the pivot.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_b, max_b) = other.aabb(other_position);
        self.overlaps_rect(position, min_b, max_b)
    }

    pub fn overlaps_rect(&self, position: Vector2, min_b: Vector2, max_b: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Smallest translation that moves this collider out of `other`.
    ///
    /// Returns `None` when the boxes do not overlap. The push is along the
    /// axis of least penetration.
    pub fn push_out(&self, position: Vector2, other: &Self, other_position: Vector2) -> Option<Vector2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        let push_left = max_a.x - min_b.x;
        let push_right = max_b.x - min_a.x;
        let push_up = max_a.y - min_b.y;
        let push_down = max_b.y - min_a.y;

        let dx = if push_left < push_right { -push_left } else { push_right };
        let dy = if push_up < push_down { -push_up } else { push_down };
        if dx.abs() < dy.abs() {
            Some(Vector2::new(dx, 0.0))
        } else {
            Some(Vector2::new(0.0, dy))
        }
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_collider_sits_above_pivot() {
        let c = BoxCollider::feet(10.0, 20.0);
        let (min, max) = c.aabb(Vector2::new(100.0, 100.0));
        assert_eq!(min, Vector2::new(95.0, 80.0));
        assert_eq!(max, Vector2::new(105.0, 100.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vector2::zero(), &b, Vector2::new(10.0, 0.0)));
        assert!(a.overlaps(Vector2::zero(), &b, Vector2::new(9.0, 0.0)));
    }

    #[test]
    fn push_out_prefers_shallow_axis() {
        let body = BoxCollider::feet(10.0, 20.0);
        let ground = BoxCollider::new(200.0, 20.0);
        // feet 2px inside the ground top
        let push = body
            .push_out(Vector2::new(50.0, 102.0), &ground, Vector2::new(0.0, 100.0))
            .unwrap();
        assert_eq!(push, Vector2::new(0.0, -2.0));

        // overlapping a wall from the left by 3px
        let wall = BoxCollider::new(20.0, 200.0);
        let push = body
            .push_out(Vector2::new(98.0, 150.0), &wall, Vector2::new(100.0, 0.0))
            .unwrap();
        assert_eq!(push, Vector2::new(-3.0, 0.0));
    }

    #[test]
    fn push_out_none_when_apart() {
        let a = BoxCollider::new(10.0, 10.0);
        assert!(a.push_out(Vector2::zero(), &a, Vector2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn contains_point_is_inclusive() {
        let c = BoxCollider::centered(10.0, 10.0);
        assert!(c.contains_point(Vector2::zero(), Vector2::new(5.0, 5.0)));
        assert!(!c.contains_point(Vector2::zero(), Vector2::new(5.1, 0.0)));
    }
}
