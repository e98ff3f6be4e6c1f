//! Seedable random source shared by gameplay systems.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(fastrand::Rng);

impl Default for GameRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}

impl GameRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    /// Uniform value in `[min, max]`; returns `min` for an empty range.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.0.f32() * (max - min)
    }

    /// Uniform point inside the rectangle spanned by two corners.
    pub fn point_in(&mut self, min: Vector2, max: Vector2) -> Vector2 {
        Vector2 {
            x: self.range_f32(min.x.min(max.x), min.x.max(max.x)),
            y: self.range_f32(min.y.min(max.y), min.y.max(max.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_inside() {
        let mut rng = GameRng::with_seed(7);
        for _ in 0..1000 {
            let v = rng.range_f32(-2.0, 3.0);
            assert!((-2.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = GameRng::with_seed(1);
        assert_eq!(rng.range_f32(4.0, 4.0), 4.0);
        assert_eq!(rng.range_f32(4.0, 1.0), 4.0);
    }

    #[test]
    fn point_in_accepts_swapped_corners() {
        let mut rng = GameRng::with_seed(3);
        let p = rng.point_in(Vector2 { x: 10.0, y: 10.0 }, Vector2 { x: 0.0, y: 0.0 });
        assert!((0.0..=10.0).contains(&p.x));
        assert!((0.0..=10.0).contains(&p.y));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::with_seed(42);
        let mut b = GameRng::with_seed(42);
        assert_eq!(a.range_f32(0.0, 1.0), b.range_f32(0.0, 1.0));
    }
}
