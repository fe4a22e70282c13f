/// Lower bound of the auto-zoom scale. A region larger than the viewport
/// is framed at natural size rather than shrunk below it.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Upper bound of the auto-zoom scale. Bounds pixelation when the target
/// region is vanishingly small.
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Floor (in render pixels) for a mapped region's extent when deriving the
/// zoom scale. Keeps the candidate scale finite for zero-size regions.
pub const MIN_ZOOM_EXTENT_PX: f32 = 1.0;

/// Default display budget for the rendered page height, in pixels, used
/// when a manifest does not supply `viewport_max_height`.
pub const DEFAULT_VIEWPORT_MAX_HEIGHT: f32 = 480.0;

/// Stroke width of region outlines in the fitted composite, in pixels.
pub const OUTLINE_STROKE_PX: u32 = 2;

/// RGBA color of region outlines in the fitted composite.
pub const OUTLINE_COLOR: [u8; 4] = [255, 196, 0, 255];

/// Gray level filling areas outside the page in the zoomed composite.
pub const BACKGROUND_GRAY: u8 = 30;
