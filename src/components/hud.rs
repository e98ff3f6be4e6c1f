//! HUD markers.
//!
//! The HUD is made of plain screen-space entities: one sprite per heart and
//! a few [`DynamicText`](super::dynamictext::DynamicText) counters.
//! [`hud_system`](crate::systems::hud::hud_system) rewrites them when the
//! values behind them change.

use bevy_ecs::prelude::Component;

/// Heart number `0..max_health / 2`, left to right.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartSlot(pub usize);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    Coins,
    Kills,
    PowerUps,
}
