//! Event types and observers.
//!
//! Events let systems talk to each other without direct dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – collision notifications emitted by the collision detector
//! - [`gameplay`] – damage, pickups and the end of a run
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – edge-triggered input actions
//! - [`menu`] – confirmed menu buttons
//! - [`switchdebug`] – toggle the debug overlay
//! - [`switchfullscreen`] – toggle fullscreen
//! - [`timer`] – finished countdowns
pub mod audio;
pub mod collision;
pub mod gameplay;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod switchdebug;
pub mod switchfullscreen;
pub mod timer;
