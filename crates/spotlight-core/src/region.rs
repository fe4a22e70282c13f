use serde::{Deserialize, Serialize};

/// Coordinate system a region's values are expressed in.
///
/// Modeled as a closed sum type with a mandatory discriminant; the system
/// is never inferred from value ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Fractions (0–1) of the rendered frame's width/height.
    Normalized,
    /// The image's intrinsic pixel space, independent of display size.
    SourcePixel,
}

/// A highlight region on a document page.
///
/// Immutable caller input. The first region in a supplied sequence is the
/// primary one and drives the auto-zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub coordinate_system: CoordinateSystem,
}

impl Region {
    pub fn normalized(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coordinate_system: CoordinateSystem::Normalized,
        }
    }

    pub fn source_pixel(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            coordinate_system: CoordinateSystem::SourcePixel,
        }
    }

    /// True when the region has no usable area (zero, negative, or
    /// non-finite extent). Degenerate regions still map to a positioned
    /// zero-size rectangle but are ineligible as zoom targets.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle in render-space pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderRect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
