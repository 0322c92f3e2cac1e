/// Shared frame buffer layout.
/// Must stay in sync with the JS `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 20 floats]
/// [Instances: max_instances × 8 floats]
/// ```
///
/// HUD text does not fit a float buffer and is handed over as JSON.

use crate::api::game::GameConfig;
use crate::api::types::Color;
use crate::renderer::camera::ViewRect;
use crate::renderer::instance::RenderInstance;
use crate::renderer::traits::Renderer;
use crate::systems::text::TextCommand;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 20;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
/// Scene view: left, right, bottom, top.
pub const HEADER_SCENE_VIEW: usize = 4;
/// Overlay view: left, right, bottom, top.
pub const HEADER_OVERLAY_VIEW: usize = 8;
pub const HEADER_SCREEN_WIDTH: usize = 12;
pub const HEADER_SCREEN_HEIGHT: usize = 13;
pub const HEADER_TEXT_COUNT: usize = 14;
/// Background: r, g, b, a. Slot 15 is reserved.
pub const HEADER_CLEAR_COLOR: usize = 16;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from the instance capacity.
    pub fn new(max_instances: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let instance_data_offset = HEADER_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;
        Self {
            max_instances,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances)
    }
}

/// Renderer that packs a presented frame into the shared buffer.
///
/// The first `set_view` of a frame is the scene view and the second is the
/// overlay view, matching the order `present` guarantees.
pub struct PackedFrameWriter {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    texts: Vec<TextCommand>,
    frame_counter: u32,
    views_seen: usize,
    instance_count: usize,
    dropped: usize,
}

impl PackedFrameWriter {
    pub fn new(layout: ProtocolLayout, screen_width: f32, screen_height: f32) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        buffer[HEADER_SCREEN_WIDTH] = screen_width;
        buffer[HEADER_SCREEN_HEIGHT] = screen_height;
        Self {
            layout,
            buffer,
            texts: Vec::new(),
            frame_counter: 0,
            views_seen: 0,
            instance_count: 0,
            dropped: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count as u32
    }

    pub fn texts(&self) -> &[TextCommand] {
        &self.texts
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    fn write_view(&mut self, at: usize, view: ViewRect) {
        self.buffer[at..at + 4].copy_from_slice(&view.to_array());
    }
}

impl Renderer for PackedFrameWriter {
    /// Starts a new frame.
    fn clear(&mut self, color: Color) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.views_seen = 0;
        self.instance_count = 0;
        self.dropped = 0;
        self.texts.clear();
        self.buffer[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        self.buffer[HEADER_INSTANCE_COUNT] = 0.0;
        self.buffer[HEADER_TEXT_COUNT] = 0.0;
        self.buffer[HEADER_CLEAR_COLOR..HEADER_CLEAR_COLOR + 4].copy_from_slice(&color.to_array());
    }

    fn set_view(&mut self, view: ViewRect) {
        let at = if self.views_seen == 0 { HEADER_SCENE_VIEW } else { HEADER_OVERLAY_VIEW };
        self.write_view(at, view);
        self.views_seen += 1;
    }

    fn draw_sprite(&mut self, instance: &RenderInstance) {
        if self.instance_count >= self.layout.max_instances {
            self.dropped += 1;
            if self.dropped == 1 {
                log::warn!("frame buffer full ({} instances)", self.layout.max_instances);
            }
            return;
        }
        let at = self.layout.instance_data_offset + self.instance_count * INSTANCE_FLOATS;
        self.buffer[at..at + INSTANCE_FLOATS].copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(instance)));
        self.instance_count += 1;
        self.buffer[HEADER_INSTANCE_COUNT] = self.instance_count as f32;
    }

    fn draw_text(&mut self, text: &TextCommand) {
        self.texts.push(text.clone());
        self.buffer[HEADER_TEXT_COUNT] = self.texts.len() as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::traits::{present, FrameSnapshot};

    #[test]
    fn layout_from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_instances, 64);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_floats, 64 * 8);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 64 * 8);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn header_fields_do_not_overlap() {
        assert_eq!(HEADER_SCENE_VIEW + 4, HEADER_OVERLAY_VIEW);
        assert_eq!(HEADER_OVERLAY_VIEW + 4, HEADER_SCREEN_WIDTH);
        assert!(HEADER_TEXT_COUNT < HEADER_CLEAR_COLOR);
        assert_eq!(HEADER_CLEAR_COLOR + 4, HEADER_FLOATS);
    }

    #[test]
    fn presented_frame_is_packed() {
        let mut frame = FrameSnapshot::new(1000.0, 800.0);
        frame.scene_view = ViewRect::new(-200.0, 1000.0, -180.0, 780.0);
        frame.sprites.push(RenderInstance { x: 500.0, y: 0.0, width: 600.0, height: 400.0, ..Default::default() });
        frame.sprites.push(RenderInstance { x: 450.0, y: 50.0, layer: 1.0, ..Default::default() });
        frame.push_text(TextCommand::new("0 mph", 50.0, 50.0));
        frame.clear_color = Color::rgb(0.1, 0.2, 0.3);

        let mut writer = PackedFrameWriter::new(ProtocolLayout::new(4), 1000.0, 800.0);
        present(&frame, &mut writer);

        let buf = writer.buffer();
        assert_eq!(buf[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(buf[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(buf[HEADER_INSTANCE_COUNT], 2.0);
        assert_eq!(&buf[HEADER_SCENE_VIEW..HEADER_SCENE_VIEW + 4], &[-200.0, 1000.0, -180.0, 780.0]);
        assert_eq!(&buf[HEADER_OVERLAY_VIEW..HEADER_OVERLAY_VIEW + 4], &[0.0, 1000.0, 0.0, 800.0]);
        assert_eq!(buf[HEADER_TEXT_COUNT], 1.0);
        assert_eq!(&buf[HEADER_CLEAR_COLOR..HEADER_CLEAR_COLOR + 4], &[0.1, 0.2, 0.3, 1.0]);

        let second = HEADER_FLOATS + INSTANCE_FLOATS;
        assert_eq!(&buf[second..second + 2], &[450.0, 50.0]);
        assert_eq!(buf[second + 6], 1.0);
        assert_eq!(writer.texts()[0].text, "0 mph");
    }

    #[test]
    fn overflow_is_dropped_and_next_frame_resets() {
        let mut frame = FrameSnapshot::new(100.0, 100.0);
        for _ in 0..3 {
            frame.sprites.push(RenderInstance::default());
        }
        let mut writer = PackedFrameWriter::new(ProtocolLayout::new(2), 100.0, 100.0);
        present(&frame, &mut writer);
        assert_eq!(writer.instance_count(), 2);

        frame.sprites.clear();
        present(&frame, &mut writer);
        assert_eq!(writer.instance_count(), 0);
        assert_eq!(writer.frame_counter(), 2);
    }
}
