//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame, writes
//! it into [`crate::resources::input::InputState`] and triggers an
//! [`InputEvent`] for every press and release. F11 and F10 trigger the
//! debug and fullscreen switches directly.
use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, RaylibHandle};

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::camera2d::{Camera2DRes, screen_to_world};
use crate::resources::input::{BoolState, InputState};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;

/// Keyboard edges for `state`, or-ed with an extra (mouse) source.
fn poll(rl: &RaylibHandle, state: &mut BoolState, extra: [bool; 3]) -> Option<bool> {
    let down = extra[0] || state.bindings().any(|k| rl.is_key_down(k));
    let pressed = extra[1] || state.bindings().any(|k| rl.is_key_pressed(k));
    let released = extra[2] || state.bindings().any(|k| rl.is_key_released(k));
    state.update(down, pressed, released)
}

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<RaylibHandle>,
    window: Res<WindowSize>,
    target: NonSend<RenderTarget>,
    camera: Res<Camera2DRes>,
    mut commands: Commands,
) {
    let input = &mut *input;
    let none = [false; 3];
    let mouse_left = [
        rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
    ];

    let edges = [
        (InputAction::Left, poll(&rl, &mut input.move_left, none)),
        (InputAction::Right, poll(&rl, &mut input.move_right, none)),
        (InputAction::Up, poll(&rl, &mut input.menu_up, none)),
        (InputAction::Down, poll(&rl, &mut input.menu_down, none)),
        (InputAction::Jump, poll(&rl, &mut input.jump, none)),
        (InputAction::Fire, poll(&rl, &mut input.fire, mouse_left)),
        (InputAction::Confirm, poll(&rl, &mut input.confirm, none)),
        (InputAction::Pause, poll(&rl, &mut input.pause, none)),
    ];
    for (action, edge) in edges {
        if let Some(pressed) = edge {
            commands.trigger(InputEvent { action, pressed });
        }
    }

    if poll(&rl, &mut input.mode_debug, none) == Some(true) {
        commands.trigger(SwitchDebugEvent {});
    }
    if poll(&rl, &mut input.fullscreen_toggle, none) == Some(true) {
        commands.trigger(SwitchFullScreenEvent {});
    }

    let mouse = rl.get_mouse_position();
    input.mouse_screen = window.window_to_game_pos(mouse, target.game_width, target.game_height);
    input.mouse_world = screen_to_world(&camera.0, input.mouse_screen);
}
