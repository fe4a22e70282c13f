//! Headless composite rendering.
//!
//! Produces the composed visual (page image + transform + optional box
//! outlines) as a CPU `RgbaImage`, for hosts that embed a bitmap rather
//! than drawing the overlay themselves.

use std::path::Path;

use image::{imageops, Rgba, RgbaImage};

use crate::consts::{BACKGROUND_GRAY, OUTLINE_COLOR, OUTLINE_STROKE_PX};
use crate::error::{Result, SpotlightError};
use crate::frame::Frame;
use crate::overlay::{OverlayMode, OverlayView};
use crate::region::RenderRect;

/// Decode a page image from disk into the RGBA buffer the compositor
/// works on.
pub fn load_page_image(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Render the composite for one view.
///
/// The page is first scaled to the frame's rendered size, then either
/// overlaid with outline rectangles (fitted) or resampled through the
/// inverse zoom transform (zoomed), with off-page areas filled by the
/// background gray. The frame must be ready.
pub fn render_composite(page: &RgbaImage, view: &OverlayView, frame: &Frame) -> Result<RgbaImage> {
    let width = frame.rendered_width.round() as u32;
    let height = frame.rendered_height.round() as u32;
    if !frame.ready() || width == 0 || height == 0 {
        return Err(SpotlightError::InvalidDimensions { width, height });
    }

    let mut canvas = imageops::resize(page, width, height, imageops::FilterType::Triangle);

    match view.mode {
        OverlayMode::Fitted => {
            for rect in &view.outlines {
                draw_outline(&mut canvas, rect, OUTLINE_STROKE_PX, Rgba(OUTLINE_COLOR));
            }
            Ok(canvas)
        }
        OverlayMode::Zoomed => {
            if view.transform.is_identity() {
                return Ok(canvas);
            }

            let transform = view.transform;
            let (cx, cy) = frame.viewport_center();
            let background = Rgba([BACKGROUND_GRAY, BACKGROUND_GRAY, BACKGROUND_GRAY, 255]);
            let mut zoomed = RgbaImage::from_pixel(width, height, background);

            // Inverse of Transform::apply: undo the scale about the
            // viewport center, then undo the translation.
            for (px, py, out) in zoomed.enumerate_pixels_mut() {
                let sx = cx + (px as f32 + 0.5 - cx) / transform.scale - transform.tx;
                let sy = cy + (py as f32 + 0.5 - cy) / transform.scale - transform.ty;
                if sx >= 0.0 && sy >= 0.0 {
                    let (ix, iy) = (sx as u32, sy as u32);
                    if ix < width && iy < height {
                        *out = *canvas.get_pixel(ix, iy);
                    }
                }
            }
            Ok(zoomed)
        }
    }
}

/// Draw a rectangle outline of `stroke` pixels, clipped to the canvas.
fn draw_outline(canvas: &mut RgbaImage, rect: &RenderRect, stroke: u32, color: Rgba<u8>) {
    if rect.is_empty() {
        return;
    }
    let (w, h) = canvas.dimensions();
    let x0 = rect.x.round().max(0.0) as u32;
    let y0 = rect.y.round().max(0.0) as u32;
    let x1 = ((rect.x + rect.width).round().max(0.0) as u32).min(w);
    let y1 = ((rect.y + rect.height).round().max(0.0) as u32).min(h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        for x in x0..x1 {
            let on_edge = x < x0 + stroke
                || x + stroke >= x1
                || y < y0 + stroke
                || y + stroke >= y1;
            if on_edge {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}
