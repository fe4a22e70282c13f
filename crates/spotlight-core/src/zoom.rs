//! Zoom transform calculation.
//!
//! Derives a uniform scale plus translation that frames a target region
//! in the viewport, clamped to [`MIN_ZOOM_SCALE`]..=[`MAX_ZOOM_SCALE`]
//! and centered on the region's centroid.

use crate::consts::{MAX_ZOOM_SCALE, MIN_ZOOM_EXTENT_PX, MIN_ZOOM_SCALE};
use crate::frame::Frame;
use crate::mapper::to_render_pixels;
use crate::region::Region;

/// Uniform scale + 2D translation in render space.
///
/// The translation is applied before the scale: the centroid is moved to
/// the viewport center in unscaled coordinates, then the scale is applied
/// about that center. Translating after scaling would double-apply the
/// scale factor to the offset, so hosts should go through [`apply`]
/// rather than composing the two themselves.
///
/// [`apply`]: Transform::apply
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Map a render-space point through the transform.
    ///
    /// `center` is the viewport center the scale pivots on, normally
    /// [`Frame::viewport_center`].
    pub fn apply(&self, x: f32, y: f32, center: (f32, f32)) -> (f32, f32) {
        (
            center.0 + (x + self.tx - center.0) * self.scale,
            center.1 + (y + self.ty - center.1) * self.scale,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compute the zoom transform framing `region` in the viewport.
///
/// Returns `None` ("no zoom available") when the frame is not ready;
/// callers collapse that to [`Transform::IDENTITY`]. The candidate scale
/// uses a 1 px floor on the mapped extent so zero-size regions clamp to
/// the ceiling instead of producing infinity.
pub fn compute_zoom(region: &Region, frame: &Frame) -> Option<Transform> {
    if !frame.ready() {
        return None;
    }

    let bpx = to_render_pixels(region, frame);
    let scale = (frame.rendered_width / bpx.width.max(MIN_ZOOM_EXTENT_PX))
        .min(frame.rendered_height / bpx.height.max(MIN_ZOOM_EXTENT_PX))
        .clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);

    let (cx, cy) = bpx.center();
    let (vx, vy) = frame.viewport_center();

    Some(Transform {
        scale,
        tx: vx - cx,
        ty: vy - cy,
    })
}
