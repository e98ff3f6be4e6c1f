//! Parallax backgrounds.
//!
//! Runs after the camera moved. The first time a layer is seen it is fitted to
//! the view, optionally bottom-aligned, anchored, and (when looping) given two
//! child segments left and right of it. Afterwards it follows the camera by
//! its factors and recentres by one segment when the camera gets too far.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::components::group::{self, Group};
use crate::components::mapposition::MapPosition;
use crate::components::parallax::{ParallaxLayer, ParallaxSegment};
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;

pub fn parallax_system(
    mut layers: Query<
        (
            Entity,
            &mut ParallaxLayer,
            &mut MapPosition,
            &mut Scale,
            &Sprite,
            &ZIndex,
        ),
        Without<ParallaxSegment>,
    >,
    mut segments: Query<(&ParallaxSegment, &mut MapPosition, &mut Scale), Without<ParallaxLayer>>,
    camera: Res<Camera2DRes>,
    mut commands: Commands,
) {
    let view = camera.view_size();
    let cam = camera.0.target;
    let mut placed: FxHashMap<Entity, (Vector2, Vector2, f32)> = FxHashMap::default();

    for (entity, mut layer, mut position, mut scale, sprite, z) in layers.iter_mut() {
        if !layer.initialized {
            let sprite_size = Vector2 {
                x: sprite.width,
                y: sprite.height,
            };
            scale.scale = layer.fit_scale(view, sprite_size, scale.scale);
            layer.segment_width = sprite.width * scale.scale.x;
            if layer.align_to_camera_bottom {
                position.pos.y =
                    layer.bottom_aligned_y(cam.y, view.y, sprite.height * scale.scale.y);
            }
            layer.cache_anchor(position.pos, cam);
            layer.initialized = true;

            if layer.uses_segments() {
                for side in [-1.0, 1.0] {
                    commands.spawn((
                        Group::new(group::SCENERY),
                        MapPosition::from_vec(position.pos),
                        *scale,
                        *z,
                        sprite.clone(),
                        ParallaxSegment {
                            layer: entity,
                            side,
                        },
                        ChildOf(entity),
                    ));
                }
            }
            log::debug!(
                "parallax layer {:?} scale ({:.2}, {:.2}) segment {:.0}",
                entity,
                scale.scale.x,
                scale.scale.y,
                layer.segment_width
            );
        } else {
            let followed = layer.follow(cam);
            position.pos = match layer.recenter(followed, cam) {
                Some(moved) => moved,
                None => followed,
            };
        }
        placed.insert(entity, (position.pos, scale.scale, layer.segment_width));
    }

    for (segment, mut position, mut scale) in segments.iter_mut() {
        let Some((center, layer_scale, width)) = placed.get(&segment.layer) else {
            continue;
        };
        position.pos = Vector2 {
            x: center.x + segment.side * width,
            y: center.y,
        };
        scale.scale = *layer_scale;
    }
}
