use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `delta` is already multiplied by `time_scale`; a scale of zero freezes
/// gameplay (pause, game over, victory) while menus keep reacting to input.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale <= 0.0
    }
}
