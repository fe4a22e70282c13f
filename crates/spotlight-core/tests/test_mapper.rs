use spotlight_core::frame::Frame;
use spotlight_core::mapper::to_render_pixels;
use spotlight_core::region::{Region, RenderRect};

fn ready_frame() -> Frame {
    Frame::new(1000.0, 1400.0, 500.0, 700.0)
}

#[test]
fn test_source_pixel_scales_per_axis() {
    let frame = ready_frame();
    let region = Region::source_pixel(100.0, 200.0, 200.0, 50.0);

    let rect = to_render_pixels(&region, &frame);
    assert_eq!(rect, RenderRect::new(50.0, 100.0, 100.0, 25.0));
}

#[test]
fn test_normalized_scales_by_rendered_size() {
    let frame = ready_frame();
    let region = Region::normalized(0.1, 0.5, 0.3, 0.2);

    let rect = to_render_pixels(&region, &frame);
    assert!((rect.x - 50.0).abs() < 1e-4);
    assert!((rect.y - 350.0).abs() < 1e-4);
    assert!((rect.width - 150.0).abs() < 1e-4);
    assert!((rect.height - 140.0).abs() < 1e-4);
}

#[test]
fn test_anisotropic_stretch_uses_independent_axis_scales() {
    // Rendered box stretched 2x horizontally, 0.5x vertically.
    let frame = Frame::new(100.0, 100.0, 200.0, 50.0);
    let region = Region::source_pixel(10.0, 10.0, 20.0, 20.0);

    let rect = to_render_pixels(&region, &frame);
    assert_eq!(rect, RenderRect::new(20.0, 5.0, 40.0, 10.0));
}

#[test]
fn test_zero_intrinsic_size_yields_degenerate_rect() {
    // Intrinsic size still unknown: no division by zero, no NaN.
    let frame = Frame::new(0.0, 0.0, 500.0, 700.0);
    let region = Region::source_pixel(100.0, 200.0, 200.0, 50.0);

    let rect = to_render_pixels(&region, &frame);
    assert_eq!(rect, RenderRect::ZERO);
}

#[test]
fn test_degenerate_region_keeps_position_with_zero_size() {
    let frame = ready_frame();
    let region = Region::normalized(0.5, 0.5, 0.0, 0.0);

    let rect = to_render_pixels(&region, &frame);
    assert_eq!(rect.x, 250.0);
    assert_eq!(rect.y, 350.0);
    assert!(rect.is_empty());
}

#[test]
fn test_negative_extent_clamps_to_zero_size() {
    let frame = ready_frame();
    let region = Region::source_pixel(100.0, 100.0, -50.0, -10.0);

    let rect = to_render_pixels(&region, &frame);
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 0.0);
}

#[test]
fn test_non_finite_input_collapses_to_zero() {
    let frame = ready_frame();
    let region = Region::normalized(f32::NAN, 0.5, 0.1, 0.1);

    assert_eq!(to_render_pixels(&region, &frame), RenderRect::ZERO);
}

#[test]
fn test_repeated_invocation_is_deterministic() {
    let frame = ready_frame();
    let region = Region::source_pixel(123.0, 45.0, 67.0, 89.0);

    let first = to_render_pixels(&region, &frame);
    for _ in 0..100 {
        assert_eq!(
            to_render_pixels(&region, &frame),
            first,
            "mapping must be pure"
        );
    }
}
