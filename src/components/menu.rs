//! Menu panels.
//!
//! Every UI panel (title, options, credits, pause, game over, victory) is an
//! entity with a [`Menu`]. Only one panel is visible at a time; the render
//! system draws the visible one in screen space. Items are either buttons
//! bound to a [`MenuAction`] or volume sliders.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Title,
    Options,
    Credits,
    Pause,
    GameOver,
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    ShowOptions,
    ShowCredits,
    Quit,
    Back,
    Resume,
    ToMenu,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSlider {
    Master,
    Music,
    Sfx,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItemKind {
    Button(MenuAction),
    /// Slider value in `[0, 1]`.
    Slider(VolumeSlider, f32),
}

#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: String,
    pub kind: MenuItemKind,
}

impl MenuItem {
    pub fn button(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            kind: MenuItemKind::Button(action),
        }
    }

    pub fn slider(label: impl Into<String>, slider: VolumeSlider) -> Self {
        Self {
            label: label.into(),
            kind: MenuItemKind::Slider(slider, 1.0),
        }
    }

    /// Text shown for the item; sliders append their value as a percentage.
    pub fn text(&self) -> String {
        match self.kind {
            MenuItemKind::Button(_) => self.label.clone(),
            MenuItemKind::Slider(_, value) => {
                format!("{}  < {:>3}% >", self.label, (value * 100.0).round() as i32)
            }
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Menu {
    pub panel: Panel,
    pub title: String,
    /// Extra line under the title (victory summary).
    pub message: Option<String>,
    pub items: Vec<MenuItem>,
    pub selected_index: usize,
    pub visible: bool,
    pub font: String,
    pub font_size: f32,
    pub item_spacing: f32,
    pub normal_color: Color,
    pub selected_color: Color,
    /// Screen position of the title; items follow below it.
    pub origin: Vector2,
}

impl Menu {
    pub fn new(panel: Panel, title: impl Into<String>, items: Vec<MenuItem>, origin: Vector2) -> Self {
        Self {
            panel,
            title: title.into(),
            message: None,
            items,
            selected_index: 0,
            visible: false,
            font: "arcade".into(),
            font_size: 16.0,
            item_spacing: 22.0,
            normal_color: Color::WHITE,
            selected_color: Color::YELLOW,
            origin,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_colors(mut self, normal: Color, selected: Color) -> Self {
        self.normal_color = normal;
        self.selected_color = selected;
        self
    }

    pub fn select_next(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
        true
    }

    pub fn select_prev(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.selected_index = (self.selected_index + self.items.len() - 1) % self.items.len();
        true
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.selected_index)
    }

    /// Update the displayed value of a slider, if this menu has it.
    pub fn set_slider(&mut self, slider: VolumeSlider, value: f32) {
        for item in self.items.iter_mut() {
            if let MenuItemKind::Slider(which, current) = &mut item.kind {
                if *which == slider {
                    *current = value;
                }
            }
        }
    }

    pub fn slider_value(&self, slider: VolumeSlider) -> Option<f32> {
        self.items.iter().find_map(|item| match item.kind {
            MenuItemKind::Slider(which, value) if which == slider => Some(value),
            _ => None,
        })
    }

    /// Screen position of item `index`.
    pub fn item_position(&self, index: usize) -> Vector2 {
        Vector2 {
            x: self.origin.x,
            y: self.origin.y + self.item_spacing * (index as f32 + 2.0),
        }
    }
}
