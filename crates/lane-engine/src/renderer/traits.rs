//! Renderer contract.
//!
//! The engine never draws pixels. Each frame it produces a read-only
//! `FrameSnapshot`, and `present` replays it into a `Renderer` in a fixed
//! order: scene view, road, player, traffic, overlay view, HUD text.

use crate::api::types::Color;
use crate::renderer::camera::ViewRect;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::systems::text::TextCommand;

/// Drawing backend (browser canvas, GPU, test recorder).
pub trait Renderer {
    /// Start a frame by clearing to `color`.
    fn clear(&mut self, _color: Color) {}

    /// Set the world rectangle mapped onto the screen.
    fn set_view(&mut self, view: ViewRect);

    /// Draw one sprite through the current view.
    fn draw_sprite(&mut self, instance: &RenderInstance);

    /// Draw one line of text through the current view.
    fn draw_text(&mut self, text: &TextCommand);
}

/// Everything needed to draw one frame. Built by the update side, read by
/// the draw side.
pub struct FrameSnapshot {
    pub clear_color: Color,
    /// View for world-space layers.
    pub scene_view: ViewRect,
    /// View restored before drawing overlays.
    pub overlay_view: ViewRect,
    /// Sprites, already in layer order.
    pub sprites: RenderBuffer,
    pub texts: Vec<TextCommand>,
}

impl FrameSnapshot {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let identity = ViewRect::identity(screen_width, screen_height);
        Self {
            clear_color: Color::GRAY,
            scene_view: identity,
            overlay_view: identity,
            sprites: RenderBuffer::new(),
            texts: Vec::new(),
        }
    }

    pub fn with_capacity(screen_width: f32, screen_height: f32, max_instances: usize) -> Self {
        Self {
            sprites: RenderBuffer::with_capacity(max_instances),
            ..Self::new(screen_width, screen_height)
        }
    }

    /// Queue a HUD line for this frame.
    pub fn push_text(&mut self, text: TextCommand) {
        self.texts.push(text);
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
    }
}

/// Replay a frame into `renderer`.
pub fn present<R: Renderer + ?Sized>(frame: &FrameSnapshot, renderer: &mut R) {
    renderer.clear(frame.clear_color);
    renderer.set_view(frame.scene_view);
    for instance in &frame.sprites.instances {
        renderer.draw_sprite(instance);
    }
    renderer.set_view(frame.overlay_view);
    for text in &frame.texts {
        renderer.draw_text(text);
    }
}
