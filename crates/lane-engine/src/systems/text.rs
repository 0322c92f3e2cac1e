//! Screen-space text overlay.
//!
//! Text is never drawn through the camera: commands carry screen pixel
//! coordinates and are presented after the view is reset to identity.

use serde::Serialize;
use crate::api::types::Color;

/// One line of HUD text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub text: String,
    /// Baseline start, in screen pixels from the bottom-left corner.
    pub x: f32,
    pub y: f32,
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl TextCommand {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color: Color::WHITE,
            size: 16.0,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Serialize text commands for the browser side.
pub fn texts_to_json(texts: &[TextCommand]) -> Result<String, serde_json::Error> {
    serde_json::to_string(texts)
}
