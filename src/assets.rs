//! # Assets Module
//!
//! Start-up asset loading. The menu background is required: a missing or undecodable file is
//! reported as an [`AssetError`] before the event loop starts. Optional assets (the hit sound)
//! are handled by their owners and never produce an error here.

use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Failure to load a required asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("required asset not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads an image from disk into RGBA8 pixels ready for GPU upload.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}
