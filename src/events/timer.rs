//! Timer expiration events.
//!
//! When one of the countdowns held by a
//! [`Timers`](crate::components::timer::Timers) component finishes, a
//! [`TimerEvent`] is triggered. [`timer_observer`] routes the well-known
//! signals to gameplay.
//!
//! [`timer_observer`]: crate::systems::time::timer_observer

use bevy_ecs::prelude::*;

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
