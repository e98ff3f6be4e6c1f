use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::camerafollow::CameraFollow;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;

/// Keep the camera on the followed entity horizontally, at a fixed height.
pub fn camera_follow_system(
    query: Query<(&MapPosition, &CameraFollow)>,
    mut camera: ResMut<Camera2DRes>,
) {
    let Some((position, follow)) = query.iter().next() else {
        return;
    };
    let target = Vector2 {
        x: position.pos.x,
        y: follow.offset_y,
    };
    if camera.0.target != target {
        camera.0.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(camera_follow_system);
        schedule.run(world);
    }

    #[test]
    fn camera_tracks_x_at_fixed_height() {
        let mut world = World::new();
        world.insert_resource(Camera2DRes::centered(640.0, 360.0, Vector2::zero()));
        world.spawn((MapPosition::new(300.0, 50.0), CameraFollow { offset_y: 180.0 }));

        run(&mut world);

        let target = world.resource::<Camera2DRes>().0.target;
        assert_eq!(target, Vector2::new(300.0, 180.0));
    }

    #[test]
    fn no_followed_entity_leaves_camera_alone() {
        let mut world = World::new();
        world.insert_resource(Camera2DRes::centered(640.0, 360.0, Vector2::new(12.0, 34.0)));

        run(&mut world);

        assert_eq!(world.resource::<Camera2DRes>().0.target, Vector2::new(12.0, 34.0));
    }
}
