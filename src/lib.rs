//! Skyhop library.
//!
//! Components, resources, systems and events of the game, exposed so the
//! integration tests can build headless worlds.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod prefabs;
pub mod resources;
pub mod systems;
