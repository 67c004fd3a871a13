//! Error type for the fallible edges of the program: reading the config file
//! and loading textures at startup. The simulation itself never fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to load config file {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
    #[error("texture asset {0:?} does not exist")]
    MissingAsset(PathBuf),
    #[error("failed to load texture {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}
