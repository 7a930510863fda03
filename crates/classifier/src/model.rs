//! Locations of trained model files on disk.
//!
//! Models are placed under the per-user data directory by whatever training
//! pipeline produced them; their file format is opaque to this crate.

use std::path::PathBuf;

pub fn models_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signsense")
        .join("models")
}

pub fn model_path(name: &str) -> PathBuf {
    models_dir().join(name)
}

pub fn is_available(name: &str) -> bool {
    let path = model_path(name);
    let available = path.exists();
    if !available {
        tracing::debug!(model = name, path = %path.display(), "model file not found");
    }
    available
}
