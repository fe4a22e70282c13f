//! Region manifest describing one displayed page.
//!
//! The manifest is format-agnostic serde; the binaries parse it from
//! TOML. The coordinate-system tag is kept as a raw string during
//! deserialization so an unrecognized tag degrades to a skipped region
//! with a warning instead of failing the whole manifest.

use serde::Deserialize;

use crate::consts::DEFAULT_VIEWPORT_MAX_HEIGHT;
use crate::region::{CoordinateSystem, Region};

/// One displayed page: the image source plus its highlight regions, in
/// priority order (first usable region is the primary zoom target).
#[derive(Clone, Debug, Deserialize)]
pub struct RegionManifest {
    /// Image resource locator, relative to the manifest's directory.
    pub src: String,
    /// Display budget constraining the rendered height, in pixels.
    pub viewport_max_height: Option<f32>,
    #[serde(default, rename = "region")]
    pub regions: Vec<RawRegion>,
}

/// A region as written in the manifest, before the coordinate-system tag
/// has been validated.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub coordinate_system: String,
}

impl RegionManifest {
    pub fn viewport_max_height(&self) -> f32 {
        self.viewport_max_height
            .unwrap_or(DEFAULT_VIEWPORT_MAX_HEIGHT)
    }

    /// Validate the raw regions, preserving manifest order.
    ///
    /// A region tagged with an unrecognized coordinate system is a
    /// configuration error: it is logged and skipped, never fatal to the
    /// rest of the overlay.
    pub fn validated_regions(&self) -> Vec<Region> {
        self.regions
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let coordinate_system = match raw.coordinate_system.as_str() {
                    "normalized" => CoordinateSystem::Normalized,
                    "source_pixel" => CoordinateSystem::SourcePixel,
                    other => {
                        tracing::warn!(
                            index,
                            tag = other,
                            "skipping region with unrecognized coordinate system"
                        );
                        return None;
                    }
                };
                Some(Region {
                    x: raw.x,
                    y: raw.y,
                    width: raw.width,
                    height: raw.height,
                    coordinate_system,
                })
            })
            .collect()
    }
}
