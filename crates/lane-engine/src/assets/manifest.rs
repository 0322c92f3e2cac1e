use serde::{Deserialize, Serialize};

/// Asset manifest listing every sprite image a game uses.
/// Loaded from a JSON file at runtime. A sprite's handle is its index in
/// `sprites`, so the browser loads images in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub sprites: Vec<SpriteDescriptor>,
}

/// Describes a single sprite image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Lookup name used by game code (e.g., "player").
    pub name: String,
    /// Relative path to the image file.
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Image paths in handle order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.sprites.iter().map(|s| s.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "sprites": [
                { "name": "player", "path": "images/Nascar_Nr_20.png" },
                { "name": "road", "path": "images/Tileable_Asphalt_Texture.png" }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sprites.len(), 2);
        assert_eq!(manifest.sprites[0].name, "player");
        let paths: Vec<&str> = manifest.paths().collect();
        assert_eq!(paths[1], "images/Tileable_Asphalt_Texture.png");
    }

    #[test]
    fn empty_object_is_empty_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.sprites.is_empty());
    }

    #[test]
    fn missing_path_is_an_error() {
        let json = r#"{ "sprites": [ { "name": "player" } ] }"#;
        assert!(AssetManifest::from_json(json).is_err());
    }
}
