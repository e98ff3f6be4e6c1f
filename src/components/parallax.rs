//! Scrolling background layers.
//!
//! A layer's position is `camera * factor + anchor` on each axis. The anchor
//! is cached once after fitting so the layer starts where the level placed
//! it. Looping layers get two [`ParallaxSegment`] copies one segment width to
//! the left and right, and re-centre themselves whenever the camera runs more
//! than one segment away.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

const MIN_SCALE_MULTIPLIER: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitMode {
    None,
    FitWidth,
    FitHeight,
    #[default]
    Cover,
    Contain,
}

#[derive(Component, Debug, Clone)]
pub struct ParallaxLayer {
    pub parallax_x: f32,
    pub parallax_y: f32,
    pub fit_mode: FitMode,
    pub keep_aspect: bool,
    pub align_to_camera_bottom: bool,
    pub bottom_offset: f32,
    pub scale_multiplier: f32,
    pub loop_x: bool,
    pub three_segments: bool,
    pub anchor: Vector2,
    pub segment_width: f32,
    /// Set once the layer was fitted and its anchor cached.
    pub initialized: bool,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self {
            parallax_x: 0.2,
            parallax_y: 0.0,
            fit_mode: FitMode::Cover,
            keep_aspect: true,
            align_to_camera_bottom: false,
            bottom_offset: 0.0,
            scale_multiplier: 1.0,
            loop_x: false,
            three_segments: true,
            anchor: Vector2::zero(),
            segment_width: 0.0,
            initialized: false,
        }
    }
}

/// One of the two looping copies of a layer; `side` is -1 (left) or 1 (right).
#[derive(Component, Debug, Clone, Copy)]
pub struct ParallaxSegment {
    pub layer: Entity,
    pub side: f32,
}

impl ParallaxLayer {
    pub fn factors(&self) -> Vector2 {
        Vector2 {
            x: self.parallax_x.clamp(0.0, 1.0),
            y: self.parallax_y.clamp(0.0, 1.0),
        }
    }

    pub fn uses_segments(&self) -> bool {
        self.loop_x && self.three_segments
    }

    /// Scale that fits a `sprite` sized image to a `view` sized camera.
    ///
    /// [`FitMode::None`] keeps `current` and only applies the multiplier.
    /// When either size has a zero component nothing is fitted and `current`
    /// comes back untouched.
    pub fn fit_scale(&self, view: Vector2, sprite: Vector2, current: Vector2) -> Vector2 {
        if sprite.x == 0.0 || sprite.y == 0.0 || view.x == 0.0 || view.y == 0.0 {
            return current;
        }
        let multiplier = self.scale_multiplier.max(MIN_SCALE_MULTIPLIER);
        let sx = view.x / sprite.x;
        let sy = view.y / sprite.y;
        let stretch = Vector2 { x: sx, y: sy };
        let uniform = |s: f32| Vector2 { x: s, y: s };
        let scale = match self.fit_mode {
            FitMode::None => current,
            FitMode::FitWidth if self.keep_aspect => uniform(sx),
            FitMode::FitHeight if self.keep_aspect => uniform(sy),
            FitMode::Cover if self.keep_aspect => uniform(sx.max(sy)),
            FitMode::Contain if self.keep_aspect => uniform(sx.min(sy)),
            _ => stretch,
        };
        scale.scale_by(multiplier)
    }

    /// Pivot y that puts the bottom edge of a centred sprite `bottom_offset`
    /// above the bottom of the view.
    pub fn bottom_aligned_y(&self, camera_y: f32, view_height: f32, scaled_height: f32) -> f32 {
        let camera_bottom = camera_y + view_height * 0.5;
        camera_bottom - scaled_height * 0.5 - self.bottom_offset
    }

    pub fn cache_anchor(&mut self, position: Vector2, camera: Vector2) {
        let f = self.factors();
        self.anchor = Vector2 {
            x: position.x - camera.x * f.x,
            y: position.y - camera.y * f.y,
        };
    }

    pub fn follow(&self, camera: Vector2) -> Vector2 {
        let f = self.factors();
        Vector2 {
            x: camera.x * f.x + self.anchor.x,
            y: camera.y * f.y + self.anchor.y,
        }
    }

    /// Shift the centre segment one width towards the camera when the camera
    /// is more than a segment away. Returns the new position when it moved.
    pub fn recenter(&mut self, position: Vector2, camera: Vector2) -> Option<Vector2> {
        if !self.uses_segments() || self.segment_width <= 0.0 {
            return None;
        }
        let shift = if camera.x - position.x > self.segment_width {
            self.segment_width
        } else if position.x - camera.x > self.segment_width {
            -self.segment_width
        } else {
            return None;
        };
        let moved = Vector2 {
            x: position.x + shift,
            y: position.y,
        };
        self.cache_anchor(moved, camera);
        Some(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn view() -> Vector2 {
        Vector2 { x: 640.0, y: 360.0 }
    }

    fn sprite() -> Vector2 {
        Vector2 { x: 320.0, y: 240.0 }
    }

    // ===== FIT =====

    #[test]
    fn cover_uses_larger_factor() {
        let layer = ParallaxLayer::default();
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(s.x, 2.0));
        assert!(approx_eq(s.y, 2.0));
    }

    #[test]
    fn contain_uses_smaller_factor() {
        let layer = ParallaxLayer {
            fit_mode: FitMode::Contain,
            ..Default::default()
        };
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(s.x, 1.5));
        assert!(approx_eq(s.y, 1.5));
    }

    #[test]
    fn fit_height_and_stretch() {
        let mut layer = ParallaxLayer {
            fit_mode: FitMode::FitHeight,
            ..Default::default()
        };
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(s.x, 1.5) && approx_eq(s.y, 1.5));

        layer.keep_aspect = false;
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(s.x, 2.0) && approx_eq(s.y, 1.5));
    }

    #[test]
    fn none_keeps_scale_and_applies_multiplier() {
        let layer = ParallaxLayer {
            fit_mode: FitMode::None,
            scale_multiplier: 2.0,
            ..Default::default()
        };
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 0.5, y: 0.75 });
        assert!(approx_eq(s.x, 1.0) && approx_eq(s.y, 1.5));
    }

    #[test]
    fn zero_multiplier_is_floored() {
        let layer = ParallaxLayer {
            fit_mode: FitMode::None,
            scale_multiplier: 0.0,
            ..Default::default()
        };
        let s = layer.fit_scale(view(), sprite(), Vector2 { x: 1.0, y: 1.0 });
        assert!(s.x > 0.0);
    }

    #[test]
    fn zero_size_leaves_scale_untouched() {
        let layer = ParallaxLayer {
            scale_multiplier: 2.0,
            ..Default::default()
        };
        let current = Vector2 { x: 0.5, y: 0.75 };
        let s = layer.fit_scale(view(), Vector2 { x: 0.0, y: 10.0 }, current);
        assert_eq!(s, current);
        let s = layer.fit_scale(Vector2 { x: 640.0, y: 0.0 }, sprite(), current);
        assert_eq!(s, current);
    }

    // ===== FOLLOW =====

    #[test]
    fn follow_keeps_start_position_and_scrolls_by_factor() {
        let mut layer = ParallaxLayer::default();
        let start = Vector2 { x: 100.0, y: 50.0 };
        layer.cache_anchor(start, Vector2 { x: 320.0, y: 180.0 });
        let p = layer.follow(Vector2 { x: 320.0, y: 180.0 });
        assert!(approx_eq(p.x, 100.0) && approx_eq(p.y, 50.0));

        let p = layer.follow(Vector2 { x: 420.0, y: 180.0 });
        assert!(approx_eq(p.x, 120.0));
        assert!(approx_eq(p.y, 50.0));
    }

    #[test]
    fn bottom_alignment() {
        let layer = ParallaxLayer {
            bottom_offset: 10.0,
            ..Default::default()
        };
        // camera bottom at 360, sprite 100 tall centred => pivot at 300
        assert!(approx_eq(layer.bottom_aligned_y(180.0, 360.0, 100.0), 300.0));
    }

    // ===== LOOP =====

    #[test]
    fn recenter_moves_one_segment_towards_camera() {
        let mut layer = ParallaxLayer {
            loop_x: true,
            segment_width: 200.0,
            ..Default::default()
        };
        let pos = Vector2 { x: 0.0, y: 0.0 };
        assert!(layer.recenter(pos, Vector2 { x: 150.0, y: 0.0 }).is_none());

        let camera = Vector2 { x: 250.0, y: 0.0 };
        let moved = layer.recenter(pos, camera).unwrap();
        assert!(approx_eq(moved.x, 200.0));
        assert!(approx_eq(layer.follow(camera).x, 200.0));

        let moved = layer.recenter(moved, Vector2 { x: -50.0, y: 0.0 }).unwrap();
        assert!(approx_eq(moved.x, 0.0));
    }

    #[test]
    fn recenter_needs_looping() {
        let mut layer = ParallaxLayer {
            segment_width: 200.0,
            ..Default::default()
        };
        assert!(layer.recenter(Vector2::zero(), Vector2 { x: 1000.0, y: 0.0 }).is_none());
    }
}
