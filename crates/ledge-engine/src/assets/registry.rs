use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based sprite lookup for game code.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
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
        for (name, desc) in &manifest.sprites {
            sprites.insert(
                name.clone(),
                SpriteComponent::new(desc.col as f32, desc.row as f32)
                    .with_atlas(AtlasId(desc.atlas)),
            );
        }
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    /// Look up a sprite by name, falling back to the default cell with a
    /// warning. Keeps games running when a manifest entry is missing.
    pub fn get_or_default(&self, name: &str) -> SpriteComponent {
        match self.sprites.get(name) {
            Some(sprite) => *sprite,
            None => {
                log::warn!("sprite '{}' not in manifest, using default", name);
                SpriteComponent::default()
            }
        }
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "tiles", "cols": 16, "rows": 8, "path": "tiles.png" }
            ],
            "sprites": {
                "hero": { "atlas": 0, "col": 3, "row": 5 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);

        let hero = reg.get("hero").expect("hero should exist");
        assert_eq!(hero.atlas, AtlasId(0));
        assert_eq!(hero.col, 3.0);
        assert_eq!(hero.row, 5.0);
        assert_eq!(hero.alpha, 1.0);
    }

    #[test]
    fn unknown_returns_none() {
        let reg = SpriteRegistry::new();
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn missing_names_fall_back_to_the_default_cell() {
        let reg = SpriteRegistry::new();
        let sprite = reg.get_or_default("nonexistent");
        assert_eq!((sprite.col, sprite.row), (0.0, 0.0));
    }
}
