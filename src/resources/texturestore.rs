//! Texture store resource.
//!
//! Holds the bot face textures (mouth closed and open). Textures are decoded
//! and uploaded once at startup with bilinear filtering; a missing or broken
//! file is a fatal startup error.
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::error::SimError;

pub const FACE_CLOSED: &str = "face_closed";
pub const FACE_OPEN: &str = "face_open";

/// Files loaded by [`TextureStore::load_faces`], relative to the textures directory.
const FACE_FILES: [(&str, &str); 2] = [
    (FACE_CLOSED, "bot_face_closed.png"),
    (FACE_OPEN, "bot_face_open.png"),
];

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub struct TextureStore {
    map: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    /// Load every bot face texture from `dir`.
    pub fn load_faces(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        dir: &Path,
    ) -> Result<Self, SimError> {
        let mut map = FxHashMap::default();
        for (key, file) in FACE_FILES {
            let texture = load_texture(rl, thread, &dir.join(file))?;
            map.insert(key, texture);
        }
        Ok(Self { map })
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

/// Decode an image file into an RGBA texture with bilinear min/mag filtering.
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, SimError> {
    if !path.is_file() {
        return Err(SimError::MissingAsset(PathBuf::from(path)));
    }
    let filename = path.to_string_lossy();
    let mut texture = rl
        .load_texture(thread, &filename)
        .map_err(|e| SimError::Texture {
            path: PathBuf::from(path),
            reason: e.to_string(),
        })?;
    texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_BILINEAR);
    info!(
        "Loaded texture {} ({}x{})",
        path.display(),
        texture.width,
        texture.height
    );
    Ok(texture)
}
