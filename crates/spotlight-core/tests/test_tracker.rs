use spotlight_core::frame::{fit_rendered_size, Frame, FrameTracker};

#[test]
fn test_not_ready_until_both_sizes_known() {
    let mut tracker = FrameTracker::new();
    let epoch = tracker.set_source("page-001.png");
    assert!(!tracker.is_ready());

    tracker.image_loaded(epoch, 1000.0, 1400.0);
    assert!(!tracker.is_ready(), "rendered size still unknown");

    tracker.viewport_resized(500.0, 700.0);
    assert!(tracker.is_ready());
    assert_eq!(tracker.frame(), Frame::new(1000.0, 1400.0, 500.0, 700.0));
}

#[test]
fn test_zero_dimensions_are_not_ready() {
    let mut tracker = FrameTracker::new();
    let epoch = tracker.set_source("page-001.png");
    tracker.image_loaded(epoch, 1000.0, 0.0);
    tracker.viewport_resized(500.0, 700.0);
    assert!(!tracker.is_ready());
}

#[test]
fn test_source_change_resets_to_not_ready() {
    let mut tracker = FrameTracker::new();
    let first = tracker.set_source("page-001.png");
    tracker.image_loaded(first, 1000.0, 1400.0);
    tracker.viewport_resized(500.0, 700.0);
    assert!(tracker.is_ready());

    let second = tracker.set_source("page-002.png");
    assert_ne!(first, second);
    assert!(
        !tracker.is_ready(),
        "stale dimensions from the previous image must never be used"
    );
    // The layout slot keeps its rendered box across the swap.
    assert_eq!(tracker.frame().rendered_width, 500.0);

    tracker.image_loaded(second, 800.0, 800.0);
    assert!(tracker.is_ready());
    assert_eq!(tracker.frame().intrinsic_width, 800.0);
}

#[test]
fn test_stale_load_completion_is_dropped() {
    let mut tracker = FrameTracker::new();
    let retired = tracker.set_source("page-001.png");
    let current = tracker.set_source("page-002.png");
    tracker.viewport_resized(500.0, 700.0);

    assert!(!tracker.image_loaded(retired, 1000.0, 1400.0));
    assert!(!tracker.is_ready(), "retired load must not fire into state");

    assert!(tracker.image_loaded(current, 640.0, 480.0));
    assert!(tracker.is_ready());
}

#[test]
fn test_resetting_same_source_is_a_noop() {
    let mut tracker = FrameTracker::new();
    let first = tracker.set_source("page-001.png");
    tracker.image_loaded(first, 1000.0, 1400.0);

    let again = tracker.set_source("page-001.png");
    assert_eq!(first, again);
    assert_eq!(tracker.frame().intrinsic_width, 1000.0);
}

#[test]
fn test_repeated_resize_is_idempotent() {
    let mut tracker = FrameTracker::new();
    let epoch = tracker.set_source("page-001.png");
    tracker.image_loaded(epoch, 1000.0, 1400.0);

    for _ in 0..50 {
        tracker.viewport_resized(500.0, 700.0);
    }
    assert_eq!(tracker.frame(), Frame::new(1000.0, 1400.0, 500.0, 700.0));
}

#[test]
fn test_fit_rendered_size_height_bound() {
    // Tall page constrained by the height budget.
    let (w, h) = fit_rendered_size(1000.0, 1400.0, 800.0, 700.0);
    assert_eq!((w, h), (500.0, 700.0));
}

#[test]
fn test_fit_rendered_size_width_bound() {
    let (w, h) = fit_rendered_size(2000.0, 1000.0, 800.0, 700.0);
    assert_eq!((w, h), (800.0, 400.0));
}

#[test]
fn test_fit_rendered_size_degenerate_inputs() {
    assert_eq!(fit_rendered_size(0.0, 1400.0, 800.0, 700.0), (0.0, 0.0));
    assert_eq!(fit_rendered_size(1000.0, 1400.0, 0.0, 700.0), (0.0, 0.0));
}
