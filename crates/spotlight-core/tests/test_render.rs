use image::{Rgba, RgbaImage};

use spotlight_core::consts::OUTLINE_COLOR;
use spotlight_core::frame::Frame;
use spotlight_core::overlay::OverlayEngine;
use spotlight_core::region::Region;
use spotlight_core::render::render_composite;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn white_page(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

fn ready_engine(regions: Vec<Region>, frame: Frame) -> OverlayEngine {
    let mut engine = OverlayEngine::new("page.png", regions);
    let epoch = engine.epoch();
    engine.image_loaded(epoch, frame.intrinsic_width, frame.intrinsic_height);
    engine.viewport_resized(frame.rendered_width, frame.rendered_height);
    engine
}

#[test]
fn test_fitted_composite_outlines_the_region() {
    let frame = Frame::new(100.0, 100.0, 100.0, 100.0);
    let mut engine = ready_engine(vec![Region::source_pixel(20.0, 20.0, 40.0, 40.0)], frame);
    engine.toggle();

    let composite = render_composite(&white_page(100, 100), &engine.view(), &frame)
        .expect("ready frame renders");

    assert_eq!(composite.dimensions(), (100, 100));
    // On the outline stroke.
    assert_eq!(*composite.get_pixel(20, 20), Rgba(OUTLINE_COLOR));
    assert_eq!(*composite.get_pixel(59, 40), Rgba(OUTLINE_COLOR));
    // Inside and outside the box the page shows through.
    assert_eq!(*composite.get_pixel(40, 40), WHITE);
    assert_eq!(*composite.get_pixel(5, 5), WHITE);
}

#[test]
fn test_zoomed_composite_fills_offpage_with_background() {
    let frame = Frame::new(100.0, 100.0, 100.0, 100.0);
    // Tiny region near the top-left corner: zooming in pushes the
    // page's far corner out of view.
    let engine = ready_engine(vec![Region::source_pixel(2.0, 2.0, 10.0, 10.0)], frame);
    let view = engine.view();
    assert_eq!(view.transform.scale, 4.0);

    let composite =
        render_composite(&white_page(100, 100), &view, &frame).expect("ready frame renders");

    // The centroid area stays page-colored at the viewport center.
    assert_eq!(*composite.get_pixel(50, 50), WHITE);
    // The top-left corner now samples ahead of the page's edge.
    let corner = *composite.get_pixel(0, 0);
    assert_ne!(corner, WHITE);
    assert_eq!(corner[0], corner[1]);
}

#[test]
fn test_identity_zoom_renders_plain_page() {
    let frame = Frame::new(100.0, 100.0, 100.0, 100.0);
    // Full-page region: scale clamps to 1, translation 0.
    let engine = ready_engine(vec![Region::normalized(0.0, 0.0, 1.0, 1.0)], frame);
    let view = engine.view();
    assert!(view.transform.is_identity());

    let composite =
        render_composite(&white_page(100, 100), &view, &frame).expect("ready frame renders");
    assert!(composite.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_not_ready_frame_refuses_to_render() {
    let frame = Frame::new(100.0, 100.0, 0.0, 0.0);
    let engine = OverlayEngine::new("page.png", Vec::new());

    let result = render_composite(&white_page(100, 100), &engine.view(), &frame);
    assert!(result.is_err());
}

#[test]
fn test_composite_scales_page_to_rendered_size() {
    let frame = Frame::new(200.0, 200.0, 100.0, 100.0);
    let engine = ready_engine(Vec::new(), frame);

    let composite = render_composite(&white_page(200, 200), &engine.view(), &frame)
        .expect("ready frame renders");
    assert_eq!(composite.dimensions(), (100, 100));
}
