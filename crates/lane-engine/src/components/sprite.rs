/// Opaque handle to a loaded sprite image.
/// Issued by the `SpriteRegistry`; the renderer maps it back to a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteHandle(pub u32);

/// Sprite component — defines how an entity appears visually.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which image to draw.
    pub handle: SpriteHandle,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn new(handle: SpriteHandle) -> Self {
        Self { handle, alpha: 1.0 }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(SpriteHandle(0))
    }
}
