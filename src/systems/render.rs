//! Rendering.
//!
//! Everything is drawn into the fixed-resolution [`RenderTarget`] first:
//! the world in camera space (sorted by [`ZIndex`], culled against the view),
//! then screen-space sprites and texts (HUD), then the visible menu panel.
//! The target is then scaled into the window with letterboxing, and the
//! debug overlay is drawn on top at window resolution.
//!
//! The raylib handle, thread and render target are taken out of the world for
//! the duration of the frame so the world can be queried while drawing.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::menu::Menu;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

const CLEAR_COLOR: Color = Color::new(24, 26, 40, 255);
const PANEL_BACKDROP: Color = Color::new(0, 0, 0, 160);

struct SpriteDraw {
    sprite: Sprite,
    position: Vector2,
    scale: Vector2,
    z: i32,
}

struct TextDraw {
    text: DynamicText,
    position: Vector2,
}

/// Screen rectangle covered by `sprite` drawn at `position`.
pub fn sprite_bounds(sprite: &Sprite, position: Vector2, scale: Vector2) -> (Vector2, Vector2) {
    let min = Vector2 {
        x: position.x - sprite.origin.x * scale.x,
        y: position.y - sprite.origin.y * scale.y,
    };
    let max = Vector2 {
        x: min.x + sprite.width * scale.x,
        y: min.y + sprite.height * scale.y,
    };
    (min, max)
}

fn visible_in(min: Vector2, max: Vector2, view_min: Vector2, view_max: Vector2) -> bool {
    !(max.x < view_min.x || min.x > view_max.x || max.y < view_min.y || min.y > view_max.y)
}

fn draw_sprite<D: RaylibDraw>(d: &mut D, textures: Option<&TextureStore>, item: &SpriteDraw) {
    let sprite = &item.sprite;
    let scale = item.scale;
    match textures.and_then(|t| t.get(&sprite.tex_key)) {
        Some(texture) => {
            // negative source sizes mirror the frame
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: if sprite.flip_h { -sprite.width } else { sprite.width },
                height: if sprite.flip_v { -sprite.height } else { sprite.height },
            };
            let dest = Rectangle {
                x: item.position.x,
                y: item.position.y,
                width: sprite.width * scale.x,
                height: sprite.height * scale.y,
            };
            let origin = Vector2 {
                x: sprite.origin.x * scale.x,
                y: sprite.origin.y * scale.y,
            };
            d.draw_texture_pro(texture, src, dest, origin, 0.0, Color::WHITE);
        }
        None => {
            let (min, max) = sprite_bounds(sprite, item.position, scale);
            d.draw_rectangle_v(min, max - min, sprite.fallback_color);
        }
    }
}

fn draw_label<D: RaylibDraw>(
    d: &mut D,
    fonts: Option<&FontStore>,
    font: &str,
    text: &str,
    position: Vector2,
    size: f32,
    color: Color,
) {
    match fonts.and_then(|f| f.get(font)) {
        Some(font) => d.draw_text_ex(font, text, position, size, 1.0, color),
        None => d.draw_text(text, position.x as i32, position.y as i32, size as i32, color),
    }
}

/// Text width, for centring menu lines.
fn label_width(fonts: Option<&FontStore>, font: &str, text: &str, size: f32) -> f32 {
    let Ok(c_text) = std::ffi::CString::new(text) else {
        return 0.0;
    };
    match fonts.and_then(|f| f.get(font)) {
        Some(font) => unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), size, 1.0).x },
        None => unsafe { ffi::MeasureText(c_text.as_ptr(), size as i32) as f32 },
    }
}

fn draw_menu<D: RaylibDraw>(d: &mut D, fonts: Option<&FontStore>, menu: &Menu, screen: Vector2) {
    d.draw_rectangle(0, 0, screen.x as i32, screen.y as i32, PANEL_BACKDROP);

    let centred = |text: &str, size: f32, y: f32| Vector2 {
        x: menu.origin.x - label_width(fonts, &menu.font, text, size) * 0.5,
        y,
    };
    let title_size = menu.font_size * 2.0;
    let title_pos = centred(&menu.title, title_size, menu.origin.y);
    draw_label(d, fonts, &menu.font, &menu.title, title_pos, title_size, menu.selected_color);

    if let Some(message) = &menu.message {
        let y = menu.origin.y + menu.item_spacing * 1.2;
        let pos = centred(message, menu.font_size * 0.75, y);
        draw_label(d, fonts, &menu.font, message, pos, menu.font_size * 0.75, menu.normal_color);
    }

    for (i, item) in menu.items.iter().enumerate() {
        let text = item.text();
        let color = if i == menu.selected_index {
            menu.selected_color
        } else {
            menu.normal_color
        };
        let pos = centred(&text, menu.font_size, menu.item_position(i).y);
        draw_label(d, fonts, &menu.font, &text, pos, menu.font_size, color);
    }
}

fn collect_world_sprites(world: &mut World, view_min: Vector2, view_max: Vector2) -> Vec<SpriteDraw> {
    let mut query = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Scale>)>();
    let mut items: Vec<SpriteDraw> = query
        .iter(world)
        .filter(|(sprite, ..)| sprite.visible)
        .filter_map(|(sprite, position, z, scale)| {
            let scale = scale.map_or(Vector2 { x: 1.0, y: 1.0 }, |s| s.scale);
            let (min, max) = sprite_bounds(sprite, position.pos, scale);
            visible_in(min, max, view_min, view_max).then(|| SpriteDraw {
                sprite: sprite.clone(),
                position: position.pos,
                scale,
                z: z.0,
            })
        })
        .collect();
    items.sort_by_key(|item| item.z);
    items
}

fn collect_screen_items(world: &mut World) -> (Vec<SpriteDraw>, Vec<TextDraw>) {
    let mut sprites = world.query::<(&Sprite, &ScreenPosition, Option<&ZIndex>)>();
    let mut screen_sprites: Vec<SpriteDraw> = sprites
        .iter(world)
        .filter(|(sprite, ..)| sprite.visible)
        .map(|(sprite, position, z)| SpriteDraw {
            sprite: sprite.clone(),
            position: position.pos,
            scale: Vector2 { x: 1.0, y: 1.0 },
            z: z.map_or(0, |z| z.0),
        })
        .collect();
    screen_sprites.sort_by_key(|item| item.z);

    let mut texts = world.query::<(&DynamicText, &ScreenPosition)>();
    let screen_texts = texts
        .iter(world)
        .filter(|(text, _)| !text.content.is_empty())
        .map(|(text, position)| TextDraw {
            text: text.clone(),
            position: position.pos,
        })
        .collect();
    (screen_sprites, screen_texts)
}

fn collect_world_texts(world: &mut World) -> Vec<TextDraw> {
    let mut texts = world.query_filtered::<(&DynamicText, &MapPosition), Without<ScreenPosition>>();
    texts
        .iter(world)
        .map(|(text, position)| TextDraw {
            text: text.clone(),
            position: position.pos,
        })
        .collect()
}

/// Draw one frame.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        log::warn!("no raylib handle, skipping render");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    let Some(mut target) = world.remove_non_send_resource::<RenderTarget>() else {
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(thread);
        return;
    };

    draw_frame(world, &mut rl, &thread, &mut target);

    world.insert_non_send_resource(target);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

fn draw_frame(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread, target: &mut RenderTarget) {
    let camera = world.resource::<Camera2DRes>();
    let cam = camera.0;
    let (view_min, view_max) = camera.view_rect();
    let screen = Vector2 {
        x: target.game_width as f32,
        y: target.game_height as f32,
    };

    let world_sprites = collect_world_sprites(world, view_min, view_max);
    let world_texts = collect_world_texts(world);
    let (screen_sprites, screen_texts) = collect_screen_items(world);
    let mut menus = world.query::<&Menu>();
    let menu = menus.iter(world).find(|m| m.visible).cloned();

    let debug = world.contains_resource::<DebugMode>();
    let debug_boxes: Vec<(Vector2, Vector2, bool)> = if debug {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        colliders
            .iter(world)
            .map(|(collider, position)| {
                let (min, max) = collider.aabb(position.pos);
                (min, max, collider.enabled)
            })
            .collect()
    } else {
        Vec::new()
    };
    let debug_pivots: Vec<Vector2> = if debug {
        let mut positions = world.query::<&MapPosition>();
        positions.iter(world).map(|p| p.pos).collect()
    } else {
        Vec::new()
    };
    let entity_count = world.query::<Entity>().iter(world).count();

    let textures = world.get_resource::<TextureStore>();
    let fonts = world.get_non_send_resource::<FontStore>();

    {
        let mut d = rl.begin_texture_mode(thread, &mut target.texture);
        d.clear_background(CLEAR_COLOR);
        {
            let mut d2 = d.begin_mode2D(cam);
            for item in &world_sprites {
                draw_sprite(&mut d2, textures, item);
            }
            for item in &world_texts {
                let pos = item.text.draw_origin(item.position);
                draw_label(&mut d2, fonts, &item.text.font, &item.text.content, pos, item.text.font_size, item.text.color);
            }
            for (min, max, enabled) in &debug_boxes {
                let color = if *enabled { Color::RED } else { Color::GRAY };
                d2.draw_rectangle_lines_ex(
                    Rectangle {
                        x: min.x,
                        y: min.y,
                        width: max.x - min.x,
                        height: max.y - min.y,
                    },
                    1.0,
                    color,
                );
            }
            for p in &debug_pivots {
                d2.draw_line_v(Vector2 { x: p.x - 4.0, y: p.y }, Vector2 { x: p.x + 4.0, y: p.y }, Color::GREEN);
                d2.draw_line_v(Vector2 { x: p.x, y: p.y - 4.0 }, Vector2 { x: p.x, y: p.y + 4.0 }, Color::GREEN);
            }
        }
        for item in &screen_sprites {
            draw_sprite(&mut d, textures, item);
        }
        for item in &screen_texts {
            let pos = item.text.draw_origin(item.position);
            draw_label(&mut d, fonts, &item.text.font, &item.text.content, pos, item.text.font_size, item.text.color);
        }
        if let Some(menu) = &menu {
            draw_menu(&mut d, fonts, menu, screen);
        }
    }

    let window = *world.resource::<WindowSize>();
    let mouse = world.get_resource::<InputState>().map(|i| (i.mouse_screen, i.mouse_world));

    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    d.draw_texture_pro(target.texture.texture(), target.source_rect(), dest, Vector2::zero(), 0.0, Color::WHITE);

    if debug {
        let fps = d.get_fps();
        d.draw_text(&format!("DEBUG (F11)  FPS {}", fps), 10, 10, 10, Color::LIME);
        d.draw_text(&format!("Entities {}", entity_count), 10, 24, 10, Color::LIME);
        d.draw_text(
            &format!("Camera ({:.1}, {:.1}) zoom {:.2}", cam.target.x, cam.target.y, cam.zoom),
            10,
            38,
            10,
            Color::LIME,
        );
        if let Some((screen_pos, world_pos)) = mouse {
            d.draw_text(
                &format!(
                    "Mouse ({:.0}, {:.0}) world ({:.1}, {:.1})",
                    screen_pos.x, screen_pos.y, world_pos.x, world_pos.y
                ),
                10,
                52,
                10,
                Color::LIME,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_origin_and_scale() {
        let sprite = Sprite::feet("x", 32.0, 32.0, Color::WHITE);
        let (min, max) = sprite_bounds(&sprite, Vector2 { x: 100.0, y: 200.0 }, Vector2 { x: 2.0, y: 1.0 });
        assert_eq!((min.x, min.y), (68.0, 168.0));
        assert_eq!((max.x, max.y), (132.0, 200.0));
    }

    #[test]
    fn culling() {
        let view_min = Vector2 { x: 0.0, y: 0.0 };
        let view_max = Vector2 { x: 640.0, y: 360.0 };
        assert!(visible_in(Vector2 { x: -10.0, y: 10.0 }, Vector2 { x: 5.0, y: 20.0 }, view_min, view_max));
        assert!(!visible_in(Vector2 { x: 700.0, y: 10.0 }, Vector2 { x: 720.0, y: 20.0 }, view_min, view_max));
    }
}
