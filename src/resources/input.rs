//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Each action is
//! bound to up to three keys: A/D or the arrows move, Space/W/Up jump, J or
//! the left mouse button fire, P or Escape pause.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use smallvec::SmallVec;

/// Keys bound to one action.
pub type KeyBindings = SmallVec<[KeyboardKey; 3]>;

#[derive(Debug, Clone)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// Any of these keys drives the action; `KEY_NULL` entries are ignored.
    pub keys: KeyBindings,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(&[])
    }
}

impl BoolState {
    pub fn bound(keys: &[KeyboardKey]) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            keys: keys
                .iter()
                .copied()
                .filter(|k| *k != KeyboardKey::KEY_NULL)
                .collect(),
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = KeyboardKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn is_bound_to(&self, key: KeyboardKey) -> bool {
        self.keys.contains(&key)
    }

    /// Store this frame's state. Returns `Some(true)` on press, `Some(false)`
    /// on release.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) -> Option<bool> {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released && !down;
        if self.just_pressed {
            Some(true)
        } else if self.just_released {
            Some(false)
        } else {
            None
        }
    }
}

/// Resource capturing the per-frame input relevant to gameplay and menus.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub menu_up: BoolState,
    pub menu_down: BoolState,
    pub jump: BoolState,
    pub fire: BoolState,
    pub confirm: BoolState,
    pub pause: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    /// Mouse position in render-target pixels.
    pub mouse_screen: Vector2,
    /// Mouse position in world pixels, through the camera.
    pub mouse_world: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        use KeyboardKey::*;
        Self {
            move_left: BoolState::bound(&[KEY_A, KEY_LEFT]),
            move_right: BoolState::bound(&[KEY_D, KEY_RIGHT]),
            menu_up: BoolState::bound(&[KEY_UP, KEY_W]),
            menu_down: BoolState::bound(&[KEY_DOWN, KEY_S]),
            jump: BoolState::bound(&[KEY_SPACE, KEY_W, KEY_UP]),
            fire: BoolState::bound(&[KEY_J]),
            confirm: BoolState::bound(&[KEY_ENTER, KEY_SPACE]),
            pause: BoolState::bound(&[KEY_P, KEY_ESCAPE]),
            mode_debug: BoolState::bound(&[KEY_F11]),
            fullscreen_toggle: BoolState::bound(&[KEY_F10]),
            mouse_screen: Vector2::zero(),
            mouse_world: Vector2::zero(),
        }
    }
}

impl InputState {
    /// -1, 0 or 1. Holding both directions cancels out.
    pub fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.move_left.active {
            axis -= 1.0;
        }
        if self.move_right.active {
            axis += 1.0;
        }
        axis
    }
}
