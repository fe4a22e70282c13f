pub mod info;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

use spotlight_core::manifest::RegionManifest;

/// A manifest together with its decoded page image.
pub struct LoadedPage {
    pub manifest: RegionManifest,
    pub image_path: PathBuf,
    pub image: RgbaImage,
}

/// Read a TOML manifest and decode the page image it points at.
/// The `src` locator is resolved relative to the manifest's directory.
pub fn load_page(manifest_path: &Path) -> Result<LoadedPage> {
    let text = fs::read_to_string(manifest_path)
        .with_context(|| format!("reading manifest {}", manifest_path.display()))?;
    let manifest: RegionManifest = toml::from_str(&text)
        .with_context(|| format!("parsing manifest {}", manifest_path.display()))?;

    let image_path = manifest_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&manifest.src);
    let image = spotlight_core::render::load_page_image(&image_path)
        .with_context(|| format!("decoding page image {}", image_path.display()))?;

    Ok(LoadedPage {
        manifest,
        image_path,
        image,
    })
}
