//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state and a rule-based controller for sprite animations
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`bullet`] – player projectiles
//! - [`camerafollow`] – marks the entity the camera tracks
//! - [`collision`] – collision callback rules and context for collision observers
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`enemy`] – enemy stats and the walk/attack/die state machine
//! - [`enemyspawner`] – periodic enemy spawning around a point
//! - [`group`] – tag component for grouping entities by name
//! - [`hud`] – markers for heart slots and HUD counters
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`menu`] – UI panels, items and actions
//! - [`parallax`] – camera-relative background layers
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`pickable`] – coins and power-ups
//! - [`player`] – player controller and health
//! - [`rigidbody`] – kinematic body with named forces
//! - [`scale`] – 2D scale factor for sprites
//! - [`screenposition`] – screen-space position for UI elements
//! - [`signals`] – per-entity signal storage for cross-system communication
//! - [`solid`] – static platforms and the bodies that stand on them
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – named countdowns that emit events when finished
//! - [`ttl`] – despawn after a delay
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod bullet;
pub mod camerafollow;
pub mod collision;
pub mod dynamictext;
pub mod enemy;
pub mod enemyspawner;
pub mod group;
pub mod hud;
pub mod mapposition;
pub mod menu;
pub mod parallax;
pub mod persistent;
pub mod pickable;
pub mod player;
pub mod rigidbody;
pub mod scale;
pub mod screenposition;
pub mod signals;
pub mod solid;
pub mod sprite;
pub mod timer;
pub mod ttl;
pub mod zindex;
