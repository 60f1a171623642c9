//! Texture registry
//!
//! Assigns each texture path a stable [`ResourceHandle`]. Loading the same
//! path twice returns the first entry; handles are never reused.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::render::sprite_batch::ResourceHandle;

/// Errors raised while loading textures
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The image could not be opened or decoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Registered texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Handle glyphs use to refer to this texture
    pub handle: ResourceHandle,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Path to handle mapping for textures
#[derive(Debug)]
pub struct TextureRegistry {
    textures: HashMap<PathBuf, TextureInfo>,
    next_handle: u64,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Register a texture whose size is already known
    pub fn register(&mut self, path: impl AsRef<Path>, width: u32, height: u32) -> TextureInfo {
        let path = path.as_ref();
        if let Some(info) = self.textures.get(path) {
            return *info;
        }

        let info = TextureInfo {
            handle: ResourceHandle(self.next_handle),
            width,
            height,
        };
        self.next_handle += 1;
        self.textures.insert(path.to_path_buf(), info);

        log::debug!(
            "Registered texture {} as {} ({}x{})",
            path.display(),
            info.handle,
            width,
            height
        );
        info
    }

    /// Register a texture, reading its size from the image file
    ///
    /// Known paths are returned without touching the file system.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<TextureInfo, TextureError> {
        let path = path.as_ref();
        if let Some(info) = self.textures.get(path) {
            return Ok(*info);
        }

        let (width, height) = image::image_dimensions(path)?;
        Ok(self.register(path, width, height))
    }

    /// Look up a registered texture
    pub fn get(&self, path: impl AsRef<Path>) -> Option<TextureInfo> {
        self.textures.get(path.as_ref()).copied()
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no texture has been registered
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique_and_non_null() {
        let mut registry = TextureRegistry::new();
        let a = registry.register("a.png", 16, 16);
        let b = registry.register("b.png", 32, 8);

        assert_eq!(a.handle, ResourceHandle(1));
        assert_eq!(b.handle, ResourceHandle(2));
        assert!(!a.handle.is_null());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TextureRegistry::new();
        let first = registry.register("hero.png", 16, 16);
        let again = registry.register("hero.png", 99, 99);

        assert_eq!(first, again);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("hero.png"), Some(first));
        assert_eq!(registry.get("missing.png"), None);
    }

    #[test]
    fn test_load_reads_dimensions() {
        let path = std::env::temp_dir().join("sprite_engine_texture_registry_test.png");
        image::RgbaImage::new(4, 2).save(&path).unwrap();

        let mut registry = TextureRegistry::new();
        let info = registry.load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((info.width, info.height), (4, 2));
        assert_eq!(registry.load(&path).unwrap(), info);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let mut registry = TextureRegistry::new();
        let result = registry.load("does/not/exist.png");

        assert!(matches!(result, Err(TextureError::Image(_))));
        assert!(registry.is_empty());
    }
}
