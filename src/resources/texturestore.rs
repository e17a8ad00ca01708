//! Texture store resource.
//!
//! A non-send resource holding the loaded textures keyed by string IDs. Both
//! sprites of the game sample from the same skeleton sheet, so a texture is
//! loaded once and then only read.
//!
//! Note: This is a non-send resource because raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// Insert with `insert_non_send_resource`; access via `NonSend<TextureStore>`.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load an image file into a GPU texture under `id`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        id: impl Into<String>,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
        let id = id.into();
        log::info!(
            "Loaded texture '{}' from {} ({}x{})",
            id,
            path,
            texture.width,
            texture.height
        );
        self.textures.insert(id, texture);
        Ok(())
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.textures.contains_key(id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_no_textures() {
        let store = TextureStore::new();
        assert!(!store.contains("skeleton"));
        assert!(store.get("skeleton").is_none());
    }
}
