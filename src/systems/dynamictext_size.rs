//! DynamicText size caching system.
//!
//! Calculates and caches the bounding box size of [`DynamicText`] components
//! when they are added or modified, so centred texts (HUD counters, panel
//! titles) do not call `MeasureTextEx` every frame.

use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::math::Vector2;

use log::{debug, warn};

use crate::components::dynamictext::DynamicText;
use crate::resources::fontstore::FontStore;

/// Recalculates the cached size for any [`DynamicText`] that was added or changed.
///
/// Uses `bypass_change_detection` when updating the size field to avoid
/// re-triggering this system on the next frame. Texts whose font is missing
/// are measured with the raylib default font.
pub fn dynamictext_size_system(
    mut query: Query<&mut DynamicText, Changed<DynamicText>>,
    fonts: NonSend<FontStore>,
) {
    for mut text in query.iter_mut() {
        debug!("Calculating size for DynamicText: '{}'", text.content);
        let Ok(text_c_string) = std::ffi::CString::new(text.content.as_bytes()) else {
            warn!("DynamicText '{}' contains a NUL byte, skipping", text.content);
            continue;
        };

        let size = match fonts.get(&text.font) {
            Some(font) => {
                let measured = unsafe {
                    ffi::MeasureTextEx(**font, text_c_string.as_ptr(), text.font_size, 1.0)
                };
                Vector2::new(measured.x, measured.y)
            }
            None => {
                let width = unsafe { ffi::MeasureText(text_c_string.as_ptr(), text.font_size as i32) };
                Vector2::new(width as f32, text.font_size)
            }
        };
        text.bypass_change_detection().set_size(size);
    }
}
