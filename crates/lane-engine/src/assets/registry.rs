use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{SpriteComponent, SpriteHandle};

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based sprite lookup for game code.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteHandle>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (index, desc) in manifest.sprites.iter().enumerate() {
            if sprites.insert(desc.name.clone(), SpriteHandle(index as u32)).is_some() {
                log::warn!("sprite '{}' listed twice in manifest, keeping the last", desc.name);
            }
        }
        Self { sprites }
    }

    /// Look up a sprite handle by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<SpriteHandle> {
        self.sprites.get(name).copied()
    }

    /// Sprite component for `name`, or None (with a warning) if the
    /// manifest does not list it. The entity is then spawned invisible.
    pub fn sprite(&self, name: &str) -> Option<SpriteComponent> {
        let sprite = self.get(name).map(SpriteComponent::new);
        if sprite.is_none() {
            log::warn!("sprite '{}' not in manifest, entity will be invisible", name);
        }
        sprite
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
