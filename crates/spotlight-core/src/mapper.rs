//! Coordinate mapping.
//!
//! Converts a [`Region`], declared in either coordinate system, into a
//! render-space pixel rectangle using the current [`Frame`]. Pure and
//! deterministic: calling it any number of times with the same inputs
//! yields identical output.

use crate::frame::Frame;
use crate::region::{CoordinateSystem, Region, RenderRect};

/// Map a region into render-space pixels.
///
/// Source-pixel regions are scaled per axis by `rendered / intrinsic`,
/// matching how the image itself is stretched into its rendered box.
/// Zero intrinsic denominators and non-finite results collapse to a
/// degenerate zero-size rectangle instead of propagating NaN/inf; a
/// degenerate region keeps its mapped position with zero size.
pub fn to_render_pixels(region: &Region, frame: &Frame) -> RenderRect {
    let (sx, sy) = match region.coordinate_system {
        CoordinateSystem::Normalized => (frame.rendered_width, frame.rendered_height),
        CoordinateSystem::SourcePixel => {
            if frame.intrinsic_width <= 0.0 || frame.intrinsic_height <= 0.0 {
                return RenderRect::ZERO;
            }
            (
                frame.rendered_width / frame.intrinsic_width,
                frame.rendered_height / frame.intrinsic_height,
            )
        }
    };

    let rect = RenderRect::new(
        region.x * sx,
        region.y * sy,
        (region.width * sx).max(0.0),
        (region.height * sy).max(0.0),
    );

    if [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .any(|v| !v.is_finite())
    {
        return RenderRect::ZERO;
    }
    rect
}
